use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for the item resource.
pub fn router() -> Router {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::replace_item)
                .patch(items::patch_item)
                .delete(items::delete_item),
        )
}
