//! Normalized pointer input.
//!
//! Mouse and touch input arrive as one tagged stream: the pointer id records
//! the origin, the phase records what happened. Components never branch on the
//! device beyond comparing pointer ids.

use super::geom::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

impl PointerId {
    pub fn is_touch(&self) -> bool {
        matches!(self, PointerId::Touch(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Mouse button pressed / touch start.
    Down,
    /// Movement while in contact (mouse drag / touch move).
    Drag,
    /// Movement without contact. Never starts a gesture.
    Hover,
    /// Mouse button released / touch end.
    Up,
    /// The platform took the pointer away (touch cancel, focus loss).
    Cancel,
    /// The pointer left the tracked surface.
    Leave,
}

impl PointerPhase {
    pub fn ends_contact(&self) -> bool {
        matches!(
            self,
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub phase: PointerPhase,
    pub sample: PointerSample,
}

impl PointerEvent {
    pub const fn new(pointer: PointerId, phase: PointerPhase, sample: PointerSample) -> Self {
        Self {
            pointer,
            phase,
            sample,
        }
    }

    pub fn mouse(phase: PointerPhase, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(
            PointerId::Mouse,
            phase,
            PointerSample::new(x, y, timestamp_ms),
        )
    }

    pub fn touch(touch_id: u64, phase: PointerPhase, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(
            PointerId::Touch(touch_id),
            phase,
            PointerSample::new(x, y, timestamp_ms),
        )
    }

    pub fn point(&self) -> Point {
        self.sample.point()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
