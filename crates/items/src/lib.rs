//! Item domain module.
//!
//! The item record, its full and partial payloads, and the in-memory store
//! that owns the collection. Deterministic domain logic only (no IO, no HTTP).

pub mod item;
pub mod patch;
pub mod store;
mod validation;

pub use item::{Item, NewItem};
pub use patch::{ItemPatch, Patch};
pub use store::ItemStore;
