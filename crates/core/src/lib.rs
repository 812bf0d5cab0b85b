//! `itemstore-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage).

pub mod error;
pub mod id;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use validation::{FieldError, ValidationErrors};
