use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use itemstore_core::ItemId;
use itemstore_items::{ItemPatch, NewItem};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// The `{id}` segment as an [`ItemId`]; every failure is a 422.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<ItemId, axum::response::Response> {
    let Path(raw) = path.map_err(errors::undecodable_item_id)?;
    raw.parse().map_err(|_| errors::invalid_item_id(&raw))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.list_items())
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get_item(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let payload = match dto::parse_body(&headers, &body).and_then(|v| NewItem::from_json(&v)) {
        Ok(p) => p,
        Err(e) => return errors::validation_error(e),
    };

    let (id, item) = services.create_item(payload);
    tracing::info!(item_id = %id, "item created");

    (
        StatusCode::CREATED,
        Json(dto::ItemSaved {
            id,
            message: dto::CREATED_MESSAGE,
            item,
        }),
    )
        .into_response()
}

pub async fn replace_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(res) => return res,
    };

    let payload = dto::parse_body(&headers, &body).and_then(|v| NewItem::from_json(&v));
    match services.replace_item(id, payload) {
        Ok(item) => (
            StatusCode::OK,
            Json(dto::ItemSaved {
                id,
                message: dto::UPDATED_MESSAGE,
                item,
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(res) => return res,
    };

    let patch = dto::parse_body(&headers, &body).and_then(|v| ItemPatch::from_json(&v));
    match services.patch_item(id, patch) {
        Ok(item) => (
            StatusCode::OK,
            Json(dto::ItemSaved {
                id,
                message: dto::PATCHED_MESSAGE,
                item,
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete_item(id) {
        Ok(deleted_item) => {
            tracing::info!(item_id = %id, "item deleted");
            (
                StatusCode::OK,
                Json(dto::ItemDeleted {
                    message: dto::DELETED_MESSAGE,
                    deleted_item,
                }),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
