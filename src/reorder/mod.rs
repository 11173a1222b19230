//! Drag-to-reorder within a collection and drag-to-transfer between named
//! collections.
//!
//! The engine never mutates collections. It reads positions through
//! [`CollectionSource`] and reports a single [`ItemMoved`] on drop; the owner
//! applies it (see [`Board`] for a reference owner).

pub mod board;
pub mod engine;
pub mod layout;
pub mod rules;
pub mod session;

pub use board::{Board, CollectionSource, OrderedItem};
pub use engine::{CancelReason, ReorderEngine, ReorderEvent, ReorderOutput};
pub use layout::{DropLayout, DropZone, ItemSlot};
pub use rules::{AcceptAll, DropRules, WithinCollection};
pub use session::{DragPhase, DragSession, ProjectedSlot};

use crate::core::{CollectionId, ItemId};

/// One committed move, applied by the owner as a single state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemMoved {
    pub item_id: ItemId,
    pub from_collection_id: CollectionId,
    pub from_index: usize,
    pub to_collection_id: CollectionId,
    pub to_index: usize,
}
