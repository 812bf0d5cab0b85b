//! Per-field readers over a JSON object.
//!
//! Each reader returns `None` and records a [`FieldError`] when the value is
//! unusable; callers keep reading so all failures are reported together.

use serde_json::{Map, Value};

use itemstore_core::{FieldError, ValidationErrors};

pub(crate) const NAME: &str = "name";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const PRICE: &str = "price";
pub(crate) const QUANTITY: &str = "quantity";

/// The body must be an object with named fields.
pub(crate) fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.as_object().ok_or_else(|| {
        ValidationErrors::single(FieldError::new(
            "model_attributes_type",
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
            body.clone(),
        ))
    })
}

pub(crate) fn string(field: &str, value: &Value, errs: &mut ValidationErrors) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => {
            errs.push(FieldError::new(
                "string_too_short",
                &["body", field],
                "String should have at least 1 character",
                value.clone(),
            ));
            None
        }
        Value::String(s) => Some(s.clone()),
        other => {
            errs.push(string_type(field, other));
            None
        }
    }
}

/// Like [`string`] but `null` is a value and empty strings are allowed.
pub(crate) fn nullable_string(
    field: &str,
    value: &Value,
    errs: &mut ValidationErrors,
) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s.clone())),
        other => {
            errs.push(string_type(field, other));
            None
        }
    }
}

pub(crate) fn number(field: &str, value: &Value, errs: &mut ValidationErrors) -> Option<f64> {
    match value.as_f64() {
        Some(n) => Some(n),
        None => {
            errs.push(FieldError::new(
                "float_type",
                &["body", field],
                "Input should be a valid number",
                value.clone(),
            ));
            None
        }
    }
}

/// Integers, plus floats with no fractional part (`3.0`).
pub(crate) fn integer(field: &str, value: &Value, errs: &mut ValidationErrors) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    if value.is_f64() {
        if let Some(f) = value.as_f64() {
            if f.fract() != 0.0 {
                errs.push(FieldError::new(
                    "int_from_float",
                    &["body", field],
                    "Input should be a valid integer, got a number with a fractional part",
                    value.clone(),
                ));
                return None;
            }
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return Some(f as i64);
            }
        }
    }

    errs.push(FieldError::new(
        "int_type",
        &["body", field],
        "Input should be a valid integer",
        value.clone(),
    ));
    None
}

fn string_type(field: &str, value: &Value) -> FieldError {
    FieldError::new(
        "string_type",
        &["body", field],
        "Input should be a valid string",
        value.clone(),
    )
}
