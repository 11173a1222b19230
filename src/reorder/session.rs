use crate::core::{CollectionId, ItemId, Point, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Pressed on an item but not yet past the start slop.
    Pressed,
    Dragging,
}

/// One in-progress reorder/transfer gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub dragged_id: ItemId,
    pub source_collection_id: CollectionId,
    pub source_index: usize,
    /// `None` while the pointer is outside every zone that accepts the item.
    pub current_collection_id: Option<CollectionId>,
    pub current_index: usize,
    pub(crate) pointer: PointerId,
    pub(crate) phase: DragPhase,
    pub(crate) position: Point,
}

/// One rendered row of a collection while a drag is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectedSlot<'a> {
    Item(&'a ItemId),
    Placeholder,
}

impl DragSession {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Last pointer position seen by the session.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_over_zone(&self) -> bool {
        self.current_collection_id.is_some()
    }

    /// Where the item lands if released now. Outside every zone it returns
    /// home.
    pub fn landing(&self) -> (&CollectionId, usize) {
        match &self.current_collection_id {
            Some(c) => (c, self.current_index),
            None => (&self.source_collection_id, self.source_index),
        }
    }

    /// Render-time order of `collection` with the dragged item replaced by a
    /// placeholder at its landing slot. Collections are never touched.
    pub fn projected_order<'a>(
        &self,
        collection: &CollectionId,
        ids: &'a [ItemId],
    ) -> Vec<ProjectedSlot<'a>> {
        let mut slots: Vec<ProjectedSlot<'a>> = ids
            .iter()
            .filter(|id| {
                !(collection == &self.source_collection_id && **id == self.dragged_id)
            })
            .map(ProjectedSlot::Item)
            .collect();

        let (landing, index) = self.landing();
        if landing == collection {
            let at = index.min(slots.len());
            slots.insert(at, ProjectedSlot::Placeholder);
        }
        slots
    }
}
