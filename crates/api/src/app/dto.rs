use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde_json::Value;

use itemstore_core::{FieldError, ItemId, ValidationErrors};
use itemstore_items::Item;

pub const CREATED_MESSAGE: &str = "Item created successfully";
pub const UPDATED_MESSAGE: &str = "Item updated successfully";
pub const PATCHED_MESSAGE: &str = "Item partially updated successfully";
pub const DELETED_MESSAGE: &str = "Item deleted successfully";

// -------------------------
// Request parsing
// -------------------------

/// Decode a raw request body into JSON.
///
/// An empty body counts as a missing body. A body declared as anything but
/// JSON is not an object; a missing `Content-Type` is read as JSON. Anything
/// that is not valid JSON is a `json_invalid` field error.
pub fn parse_body(headers: &HeaderMap, bytes: &[u8]) -> Result<Value, ValidationErrors> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationErrors::single(FieldError::missing(
            &["body"],
            Value::Null,
        )));
    }

    if !declares_json(headers) {
        return Err(ValidationErrors::single(FieldError::new(
            "model_attributes_type",
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
            Value::String(String::from_utf8_lossy(bytes).into_owned()),
        )));
    }

    serde_json::from_slice(bytes).map_err(|e| {
        ValidationErrors::single(FieldError::new(
            "json_invalid",
            &["body"],
            format!("JSON decode error: {e}"),
            Value::Null,
        ))
    })
}

/// `application/json`, any `+json` media type, or no header at all.
fn declares_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

// -------------------------
// Response DTOs
// -------------------------

/// Body for create / replace / patch.
#[derive(Debug, Serialize)]
pub struct ItemSaved {
    pub id: ItemId,
    pub message: &'static str,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct ItemDeleted {
    pub message: &'static str,
    pub deleted_item: Item,
}
