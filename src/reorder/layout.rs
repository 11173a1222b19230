use crate::core::{Axis, CollectionId, ItemId, Point, Rect};

/// Where one item is currently rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSlot {
    pub id: ItemId,
    pub rect: Rect,
}

/// Rendered region of one collection plus its items, in list order.
#[derive(Clone, Debug, PartialEq)]
pub struct DropZone {
    pub collection: CollectionId,
    pub rect: Rect,
    pub axis: Axis,
    pub items: Vec<ItemSlot>,
}

impl DropZone {
    pub fn new(collection: impl Into<CollectionId>, rect: Rect, axis: Axis) -> Self {
        Self {
            collection: collection.into(),
            rect,
            axis,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, id: impl Into<ItemId>, rect: Rect) -> Self {
        self.push_item(id, rect);
        self
    }

    pub fn push_item(&mut self, id: impl Into<ItemId>, rect: Rect) {
        self.items.push(ItemSlot {
            id: id.into(),
            rect,
        });
    }

    pub fn item_at(&self, p: Point) -> Option<&ItemSlot> {
        self.items.iter().find(|slot| slot.rect.contains(p))
    }

    /// Index the dragged item would take if dropped at `p`: the number of
    /// sibling items whose midpoint lies before the pointer. `excluding` is
    /// the dragged item when it is rendered in this zone.
    pub fn insertion_index(&self, p: Point, excluding: Option<&ItemId>) -> usize {
        let along = p.along(self.axis);
        self.items
            .iter()
            .filter(|slot| Some(&slot.id) != excluding)
            .filter(|slot| slot.rect.midpoint(self.axis) < along)
            .count()
    }
}

/// Per-frame snapshot of every registered drop zone. Rebuilt by the owner
/// whenever the lists are re-rendered.
#[derive(Clone, Debug, Default)]
pub struct DropLayout {
    zones: Vec<DropZone>,
}

impl DropLayout {
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn zone(&self, collection: &CollectionId) -> Option<&DropZone> {
        self.zones.iter().find(|z| &z.collection == collection)
    }

    /// Registers `zone`, replacing any earlier zone for the same collection.
    pub fn register(&mut self, zone: DropZone) {
        if let Some(existing) = self
            .zones
            .iter_mut()
            .find(|z| z.collection == zone.collection)
        {
            *existing = zone;
        } else {
            self.zones.push(zone);
        }
    }

    pub fn unregister(&mut self, collection: &CollectionId) -> Option<DropZone> {
        let pos = self.zones.iter().position(|z| &z.collection == collection)?;
        Some(self.zones.remove(pos))
    }

    /// Topmost zone containing `p`; later registrations sit on top.
    pub fn zone_at(&self, p: Point) -> Option<&DropZone> {
        self.zones.iter().rev().find(|z| z.rect.contains(p))
    }

    pub fn zone_at_where<F>(&self, p: Point, mut pred: F) -> Option<&DropZone>
    where
        F: FnMut(&DropZone) -> bool,
    {
        self.zones
            .iter()
            .rev()
            .find(|z| z.rect.contains(p) && pred(z))
    }

    pub fn item_at(&self, p: Point) -> Option<(&DropZone, &ItemSlot)> {
        self.zones
            .iter()
            .rev()
            .find_map(|z| z.item_at(p).map(|slot| (z, slot)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reorder/layout.rs"]
mod tests;
