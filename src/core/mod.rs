//! Core vocabulary shared by every interaction component:
//! - error: the recoverable error taxonomy
//! - event: normalized pointer input (mouse and touch in one stream)
//! - geom: float geometry in the tracked element's coordinate space
//! - id: caller-assigned collection/item ids
//! - clock: millisecond time sources

pub mod clock;
pub mod error;
pub mod event;
pub mod geom;
pub mod id;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{InteractionError, Result};
pub use event::{PointerEvent, PointerId, PointerPhase, PointerSample};
pub use geom::{Axis, Point, Rect};
pub use id::{CollectionId, ItemId};
