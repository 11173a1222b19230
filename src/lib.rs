//! glide - headless pointer interaction engines
//!
//! Module layout:
//! - core: ids, geometry, pointer events, errors, clocks
//! - input: pointer tracking (and the crossterm mouse adapter under `tui`)
//! - gesture: swipe session, settle animation, easing, cursor follower
//! - autoplay: polled interval scheduler
//! - carousel: swipeable auto-advancing carousel controller
//! - reorder: drag-to-reorder / drag-to-transfer engine and drop zones
//! - config: `InteractionConfig` loading and validation
//! - logging: tracing subscriber setup
//! - tui: terminal demo front-end (feature `tui`)
//!
//! Nothing here draws or owns data. Hosts feed pointer events and the current
//! time in, and render from the returned outputs and view state.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod core;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod reorder;
#[cfg(feature = "tui")]
pub mod tui;

pub use crate::autoplay::AutoplayScheduler;
pub use crate::carousel::{CarouselController, CarouselEvent, CarouselOutput, CarouselViewState};
pub use crate::config::{ConfigError, InteractionConfig};
pub use crate::core::{
    Axis, CollectionId, InteractionError, ItemId, Point, PointerEvent, PointerPhase, Rect,
};
pub use crate::gesture::GestureSession;
pub use crate::input::PointerTracker;
pub use crate::reorder::{DropLayout, ItemMoved, ReorderEngine, ReorderEvent, ReorderOutput};
