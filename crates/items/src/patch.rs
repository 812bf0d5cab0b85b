//! Partial payloads.

use serde_json::Value;

use itemstore_core::ValidationErrors;

use crate::validation::{self, DESCRIPTION, NAME, PRICE, QUANTITY};

/// A field in a partial payload: either left out, or given a value.
///
/// `Patch<Option<T>>` keeps "not sent" (`Unset`) apart from "sent as null"
/// (`Set(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// Write the value into `target` if set.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(v) = self {
            *target = v;
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Set(v),
            None => Patch::Unset,
        }
    }
}

/// Partial item update; only `Set` fields are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Patch<String>,
    pub description: Patch<Option<String>>,
    pub price: Patch<f64>,
    pub quantity: Patch<i64>,
}

impl ItemPatch {
    /// True when no field is set (merging it changes nothing).
    pub fn is_empty(&self) -> bool {
        !(self.name.is_set()
            || self.description.is_set()
            || self.price.is_set()
            || self.quantity.is_set())
    }

    /// Validate a JSON body where every field is optional.
    ///
    /// `description: null` clears the description. `name`, `price` and
    /// `quantity` cannot be null since the stored record always has them.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let obj = validation::as_object(body)?;
        let mut errs = ValidationErrors::new();

        let name = obj
            .get(NAME)
            .and_then(|v| validation::string(NAME, v, &mut errs));
        let description = obj
            .get(DESCRIPTION)
            .and_then(|v| validation::nullable_string(DESCRIPTION, v, &mut errs));
        let price = obj
            .get(PRICE)
            .and_then(|v| validation::number(PRICE, v, &mut errs));
        let quantity = obj
            .get(QUANTITY)
            .and_then(|v| validation::integer(QUANTITY, v, &mut errs));

        errs.finish(|| Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            quantity: quantity.into(),
        })
    }
}
