use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use itemstore_core::{DomainError, DomainResult, ItemId, ValidationErrors};
use itemstore_items::{Item, ItemPatch, ItemStore, NewItem};

/// Shared application state.
///
/// The store sits behind a single mutex; every method takes it exactly once,
/// so id allocation and the map update land together.
#[derive(Debug, Default)]
pub struct AppServices {
    store: Mutex<ItemStore>,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(ItemStore::new()),
        }
    }

    // Store operations are single map mutations, so a panic elsewhere cannot
    // leave it half-updated.
    fn store(&self) -> MutexGuard<'_, ItemStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_items(&self) -> BTreeMap<ItemId, Item> {
        self.store().list().clone()
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<Item> {
        self.store().get(id).cloned()
    }

    pub fn create_item(&self, payload: NewItem) -> (ItemId, Item) {
        let mut store = self.store();
        let (id, item) = store.create(payload);
        (id, item.clone())
    }

    /// Unknown ids win over a bad payload.
    pub fn replace_item(
        &self,
        id: ItemId,
        payload: Result<NewItem, ValidationErrors>,
    ) -> DomainResult<Item> {
        let mut store = self.store();
        if !store.contains(id) {
            return Err(DomainError::NotFound);
        }
        store.replace(id, payload?).cloned()
    }

    /// Unknown ids win over a bad payload.
    pub fn patch_item(
        &self,
        id: ItemId,
        patch: Result<ItemPatch, ValidationErrors>,
    ) -> DomainResult<Item> {
        let mut store = self.store();
        if !store.contains(id) {
            return Err(DomainError::NotFound);
        }
        store.patch(id, patch?).cloned()
    }

    pub fn delete_item(&self, id: ItemId) -> DomainResult<Item> {
        self.store().delete(id)
    }

    pub fn next_id(&self) -> ItemId {
        self.store().next_id()
    }
}
