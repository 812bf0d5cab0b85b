use std::collections::BTreeMap;

use itemstore_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, NewItem};
use crate::patch::ItemPatch;

/// In-memory item collection.
///
/// Identifiers come from a counter starting at 1 that only ever moves
/// forward; deleting an item never frees its id for reuse. The store is
/// single-owner (`&mut self` for mutation); share it behind one lock.
#[derive(Debug)]
pub struct ItemStore {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: ItemId::FIRST,
        }
    }

    /// All items, ascending by id.
    pub fn list(&self) -> &BTreeMap<ItemId, Item> {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> DomainResult<&Item> {
        self.items.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Store a new item under the next identifier.
    pub fn create(&mut self, payload: NewItem) -> (ItemId, &Item) {
        let id = self.next_id;
        self.next_id = id.next();

        tracing::debug!(item_id = %id, "item created");
        (id, self.items.entry(id).or_insert(payload.into()))
    }

    /// Replace the whole record; fields not in `payload` go back to defaults.
    pub fn replace(&mut self, id: ItemId, payload: NewItem) -> DomainResult<&Item> {
        let slot = self.items.get_mut(&id).ok_or(DomainError::NotFound)?;
        *slot = payload.into();

        tracing::debug!(item_id = %id, "item replaced");
        Ok(&*slot)
    }

    /// Merge the set fields of `patch` into the stored record.
    pub fn patch(&mut self, id: ItemId, patch: ItemPatch) -> DomainResult<&Item> {
        let slot = self.items.get_mut(&id).ok_or(DomainError::NotFound)?;
        if !patch.is_empty() {
            slot.merge(patch);
            tracing::debug!(item_id = %id, "item patched");
        }
        Ok(&*slot)
    }

    pub fn delete(&mut self, id: ItemId) -> DomainResult<Item> {
        let removed = self.items.remove(&id).ok_or(DomainError::NotFound)?;

        tracing::debug!(item_id = %id, "item deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The identifier the next create will hand out.
    pub fn next_id(&self) -> ItemId {
        self.next_id
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
