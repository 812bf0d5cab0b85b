use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Value};

use itemstore_core::{DomainError, FieldError, ValidationErrors};

pub const NOT_FOUND_DETAIL: &str = "Item not found";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => not_found(),
        DomainError::Validation(errors) => validation_error(errors),
    }
}

/// `404 {"detail": "Item not found"}`
pub fn not_found() -> axum::response::Response {
    json_detail(StatusCode::NOT_FOUND, json!(NOT_FOUND_DETAIL))
}

/// `422 {"detail": [ {type, loc, msg, input}, ... ]}`
pub fn validation_error(errors: ValidationErrors) -> axum::response::Response {
    tracing::debug!(%errors, "request rejected");
    json_detail(StatusCode::UNPROCESSABLE_ENTITY, json!(errors))
}

/// The `{id}` path segment is not an integer.
pub fn invalid_item_id(raw: &str) -> axum::response::Response {
    validation_error(ValidationErrors::single(FieldError::new(
        "int_parsing",
        &["path", "item_id"],
        "Input should be a valid integer, unable to parse string as an integer",
        Value::String(raw.to_string()),
    )))
}

/// The `{id}` path segment could not be decoded at all (bad percent-encoding).
pub fn undecodable_item_id(rejection: PathRejection) -> axum::response::Response {
    validation_error(ValidationErrors::single(FieldError::new(
        "int_parsing",
        &["path", "item_id"],
        format!("Input should be a valid integer, {}", rejection.body_text()),
        Value::Null,
    )))
}

pub fn json_detail(status: StatusCode, detail: Value) -> axum::response::Response {
    (status, axum::Json(json!({ "detail": detail }))).into_response()
}
