//! Reference owner of the orderable collections.

use super::ItemMoved;
use crate::core::{CollectionId, InteractionError, ItemId, Result};
use rustc_hash::FxHashMap;

/// Read access the engine needs to resolve positions by id at pointer-down
/// and again at drop.
pub trait CollectionSource {
    fn position_of(&self, collection: &CollectionId, item: &ItemId) -> Option<usize>;
    fn len_of(&self, collection: &CollectionId) -> Option<usize>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderedItem<T> {
    pub id: ItemId,
    pub payload: T,
}

impl<T> OrderedItem<T> {
    pub fn new(id: impl Into<ItemId>, payload: T) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

/// Named ordered collections. Ids are unique within a collection only.
#[derive(Clone, Debug)]
pub struct Board<T> {
    order: Vec<CollectionId>,
    collections: FxHashMap<CollectionId, Vec<OrderedItem<T>>>,
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            collections: FxHashMap::default(),
        }
    }
}

impl<T> Board<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a collection. New collections go last.
    pub fn set_collection(&mut self, id: impl Into<CollectionId>, items: Vec<OrderedItem<T>>) {
        let id = id.into();
        if !self.collections.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.collections.insert(id, items);
    }

    pub fn remove_collection(&mut self, id: &CollectionId) -> Option<Vec<OrderedItem<T>>> {
        self.order.retain(|c| c != id);
        self.collections.remove(id)
    }

    pub fn collection_ids(&self) -> &[CollectionId] {
        &self.order
    }

    pub fn collection(&self, id: &CollectionId) -> Option<&[OrderedItem<T>]> {
        self.collections.get(id).map(Vec::as_slice)
    }

    pub fn ids(&self, id: &CollectionId) -> Vec<ItemId> {
        self.collection(id)
            .map(|items| items.iter().map(|i| i.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn push_item(&mut self, collection: &CollectionId, item: OrderedItem<T>) -> bool {
        match self.collections.get_mut(collection) {
            Some(items) => {
                items.push(item);
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, collection: &CollectionId, item: &ItemId) -> Option<OrderedItem<T>> {
        let items = self.collections.get_mut(collection)?;
        let pos = items.iter().position(|i| &i.id == item)?;
        Some(items.remove(pos))
    }

    /// Applies a move as one transition: everything is checked before
    /// anything is mutated. The item is located by id, not by `from_index`.
    pub fn apply(&mut self, moved: &ItemMoved) -> Result<()> {
        let stale = |collection: &CollectionId| InteractionError::StaleDragTarget {
            item: moved.item_id.clone(),
            collection: collection.clone(),
        };

        let from = self
            .position_of(&moved.from_collection_id, &moved.item_id)
            .ok_or_else(|| stale(&moved.from_collection_id))?;
        if !self.collections.contains_key(&moved.to_collection_id) {
            return Err(stale(&moved.to_collection_id));
        }

        let item = self
            .collections
            .get_mut(&moved.from_collection_id)
            .map(|items| items.remove(from))
            .ok_or_else(|| stale(&moved.from_collection_id))?;
        let dest = self
            .collections
            .get_mut(&moved.to_collection_id)
            .ok_or_else(|| stale(&moved.to_collection_id))?;
        let to = moved.to_index.min(dest.len());
        dest.insert(to, item);

        tracing::debug!(
            item = %moved.item_id,
            from = %moved.from_collection_id,
            to = %moved.to_collection_id,
            to_index = to,
            "board applied move"
        );
        Ok(())
    }
}

impl<T> CollectionSource for Board<T> {
    fn position_of(&self, collection: &CollectionId, item: &ItemId) -> Option<usize> {
        self.collections
            .get(collection)?
            .iter()
            .position(|i| &i.id == item)
    }

    fn len_of(&self, collection: &CollectionId) -> Option<usize> {
        self.collections.get(collection).map(Vec::len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reorder/board.rs"]
mod tests;
