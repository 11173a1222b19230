//! Pointer input normalization.

#[cfg(feature = "tui")]
pub mod crossterm;
pub mod pointer_tracker;

pub use pointer_tracker::{PointerDelta, PointerRelease, PointerTracker};
