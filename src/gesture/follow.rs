//! Trailing cursor follower.
//!
//! Each elapsed frame moves the position a fixed fraction of the remaining
//! distance toward the target. Stepped by the host's clock; there is no
//! self-scheduling loop.

use super::FRAME_INTERVAL_MS;
use crate::core::Point;

const SNAP_DISTANCE_PX: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct CursorFollower {
    current: Point,
    target: Point,
    factor: f32,
    last_step_ms: Option<u64>,
}

impl CursorFollower {
    /// `factor` is the per-frame fraction in (0, 1].
    pub fn new(start: Point, factor: f32) -> Self {
        Self {
            current: start,
            target: start,
            factor: factor.clamp(f32::EPSILON, 1.0),
            last_step_ms: None,
        }
    }

    pub fn position(&self) -> Point {
        self.current
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    pub fn jump_to(&mut self, p: Point) {
        self.current = p;
        self.target = p;
        self.last_step_ms = None;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance by the frames elapsed since the previous step. Returns whether
    /// the position moved.
    pub fn step(&mut self, now_ms: u64) -> bool {
        let frames = match self.last_step_ms {
            None => 1,
            Some(last) => (now_ms.saturating_sub(last) / FRAME_INTERVAL_MS) as i32,
        };
        if frames <= 0 {
            return false;
        }
        self.last_step_ms = Some(now_ms);

        if self.is_settled() {
            return false;
        }

        let remaining = 1.0 - (1.0 - self.factor).powi(frames);
        self.current.x += (self.target.x - self.current.x) * remaining;
        self.current.y += (self.target.y - self.current.y) * remaining;

        let dx = self.target.x - self.current.x;
        let dy = self.target.y - self.current.y;
        if dx.hypot(dy) < SNAP_DISTANCE_PX {
            self.current = self.target;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/follow.rs"]
mod tests;
