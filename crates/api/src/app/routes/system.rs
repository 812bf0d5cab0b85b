use axum::{http::StatusCode, response::IntoResponse, Json};

pub const WELCOME_MESSAGE: &str = "Welcome to the Item Store REST API";

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Welcome message plus a catalog of the item endpoints.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": WELCOME_MESSAGE,
        "endpoints": {
            "GET /items": "Get all items",
            "GET /items/{id}": "Get item by ID",
            "POST /items": "Create new item",
            "PUT /items/{id}": "Update item completely",
            "PATCH /items/{id}": "Update item partially",
            "DELETE /items/{id}": "Delete item",
        },
    }))
}
