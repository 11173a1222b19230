//! Gesture state machines and the time-stepped animations that finish them.

pub mod easing;
pub mod follow;
pub mod session;
pub mod settle;

pub use easing::Easing;
pub use follow::CursorFollower;
pub use session::{GestureResolution, GestureSession, GestureState, Step};
pub use settle::SettleAnimation;

/// Frame pacing for polled animations.
pub const FRAME_INTERVAL_MS: u64 = 16;
