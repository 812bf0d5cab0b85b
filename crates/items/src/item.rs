use serde::Serialize;
use serde_json::Value;

use itemstore_core::{FieldError, ValidationErrors};

use crate::patch::ItemPatch;
use crate::validation::{self, DESCRIPTION, NAME, PRICE, QUANTITY};

/// A stored item record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

impl Item {
    /// Overwrite every field that is set in `patch`; unset fields stay as they are.
    pub fn merge(&mut self, patch: ItemPatch) {
        patch.name.apply_to(&mut self.name);
        patch.description.apply_to(&mut self.description);
        patch.price.apply_to(&mut self.price);
        patch.quantity.apply_to(&mut self.quantity);
    }
}

/// A validated full payload (create / replace).
///
/// Optional fields are already resolved to their defaults, so turning this
/// into an [`Item`] never carries over anything from a previous record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            quantity: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Validate a JSON body.
    ///
    /// `name` and `price` are required; `description` defaults to null and
    /// `quantity` to 0. Unknown keys are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let obj = validation::as_object(body)?;
        let mut errs = ValidationErrors::new();

        let name = match obj.get(NAME) {
            Some(v) => validation::string(NAME, v, &mut errs),
            None => {
                errs.push(FieldError::missing(&["body", NAME], body.clone()));
                None
            }
        };

        let description = match obj.get(DESCRIPTION) {
            Some(v) => validation::nullable_string(DESCRIPTION, v, &mut errs),
            None => Some(None),
        };

        let price = match obj.get(PRICE) {
            Some(v) => validation::number(PRICE, v, &mut errs),
            None => {
                errs.push(FieldError::missing(&["body", PRICE], body.clone()));
                None
            }
        };

        let quantity = match obj.get(QUANTITY) {
            Some(v) => validation::integer(QUANTITY, v, &mut errs),
            None => Some(0),
        };

        match (name, description, price, quantity) {
            (Some(name), Some(description), Some(price), Some(quantity)) if errs.is_empty() => {
                Ok(Self {
                    name,
                    description,
                    price,
                    quantity,
                })
            }
            _ => Err(errs),
        }
    }
}

impl From<NewItem> for Item {
    fn from(value: NewItem) -> Self {
        Self {
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kinds(errs: &ValidationErrors) -> Vec<(&'static str, String)> {
        errs.errors()
            .iter()
            .map(|e| (e.kind, e.loc.join(".")))
            .collect()
    }

    #[test]
    fn minimal_payload_gets_defaults() {
        let item = NewItem::from_json(&json!({ "name": "Minimal Item", "price": 49.99 })).unwrap();
        assert_eq!(item, NewItem::new("Minimal Item", 49.99));
        assert_eq!(item.description, None);
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn full_payload_is_kept_verbatim() {
        let item = NewItem::from_json(&json!({
            "name": "Test Laptop",
            "description": "A test laptop",
            "price": 999.99,
            "quantity": 5,
        }))
        .unwrap();
        assert_eq!(
            item,
            NewItem::new("Test Laptop", 999.99)
                .with_description("A test laptop")
                .with_quantity(5)
        );
    }

    #[test]
    fn integer_price_is_a_number() {
        let item = NewItem::from_json(&json!({ "name": "A", "price": 1 })).unwrap();
        assert_eq!(item.price, 1.0);
    }

    #[test]
    fn negative_values_are_accepted() {
        let item = NewItem::from_json(&json!({ "name": "A", "price": -5.0, "quantity": -3 })).unwrap();
        assert_eq!(item.price, -5.0);
        assert_eq!(item.quantity, -3);
    }

    #[test]
    fn whole_float_quantity_is_accepted() {
        let item = NewItem::from_json(&json!({ "name": "A", "price": 1, "quantity": 4.0 })).unwrap();
        assert_eq!(item.quantity, 4);
    }

    #[test]
    fn explicit_null_description_is_none() {
        let item = NewItem::from_json(&json!({ "name": "A", "price": 1, "description": null })).unwrap();
        assert_eq!(item.description, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item = NewItem::from_json(&json!({ "name": "A", "price": 1, "colour": "red" })).unwrap();
        assert_eq!(item, NewItem::new("A", 1.0));
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errs = NewItem::from_json(&json!({ "description": "x" })).unwrap_err();
        assert_eq!(
            kinds(&errs),
            vec![
                ("missing", "body.name".to_string()),
                ("missing", "body.price".to_string()),
            ]
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let errs = NewItem::from_json(&json!({ "name": "A", "price": "not a number" })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("float_type", "body.price".to_string())]);
        assert_eq!(errs.errors()[0].input, json!("not a number"));
    }

    #[test]
    fn null_price_is_rejected() {
        let errs = NewItem::from_json(&json!({ "name": "A", "price": null })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("float_type", "body.price".to_string())]);
    }

    #[test]
    fn non_string_and_empty_names_are_rejected() {
        let errs = NewItem::from_json(&json!({ "name": 7, "price": 1 })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("string_type", "body.name".to_string())]);

        let errs = NewItem::from_json(&json!({ "name": "", "price": 1 })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("string_too_short", "body.name".to_string())]);
    }

    #[test]
    fn bad_quantity_types() {
        let errs = NewItem::from_json(&json!({ "name": "A", "price": 1, "quantity": 1.5 })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("int_from_float", "body.quantity".to_string())]);

        let errs = NewItem::from_json(&json!({ "name": "A", "price": 1, "quantity": "3" })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("int_type", "body.quantity".to_string())]);

        let errs = NewItem::from_json(&json!({ "name": "A", "price": 1, "quantity": null })).unwrap_err();
        assert_eq!(kinds(&errs), vec![("int_type", "body.quantity".to_string())]);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errs = NewItem::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(kinds(&errs), vec![("model_attributes_type", "body".to_string())]);
    }

    #[test]
    fn item_serializes_null_description() {
        let item = Item::from(NewItem::new("A", 1.0));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "name": "A", "description": null, "price": 1.0, "quantity": 0 })
        );
    }
}
