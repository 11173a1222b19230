use crate::core::{CollectionId, ItemId};

/// Which items may be picked up and where they may land. A zone that refuses
/// the drop is treated like empty space.
pub trait DropRules {
    fn can_drag(&self, _item: &ItemId, _collection: &CollectionId) -> bool {
        true
    }

    fn can_drop(&self, item: &ItemId, from: &CollectionId, to: &CollectionId) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl DropRules for AcceptAll {
    fn can_drop(&self, _item: &ItemId, _from: &CollectionId, _to: &CollectionId) -> bool {
        true
    }
}

/// Reorder only; items never change collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithinCollection;

impl DropRules for WithinCollection {
    fn can_drop(&self, _item: &ItemId, from: &CollectionId, to: &CollectionId) -> bool {
        from == to
    }
}
