//! Single-pointer tracker.
//!
//! Turns a pointer's samples into deltas relative to where it went down. Only
//! the first pointer is followed; other touches are refused until it lifts.

use crate::core::{Axis, InteractionError, PointerId, PointerSample, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PointerDelta {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.dx,
            Axis::Vertical => self.dy,
        }
    }

    pub fn length(&self) -> f32 {
        self.dx.hypot(self.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRelease {
    pub delta: PointerDelta,
    pub elapsed_ms: u64,
    pub velocity_px_per_ms: f32,
}

#[derive(Clone, Copy, Debug)]
struct Tracked {
    pointer: PointerId,
    start: PointerSample,
    last: PointerSample,
}

impl Tracked {
    fn delta_to(&self, sample: PointerSample) -> PointerDelta {
        PointerDelta::new(sample.x - self.start.x, sample.y - self.start.y)
    }

    fn release_at(&self, sample: PointerSample) -> PointerRelease {
        let delta = self.delta_to(sample);
        let elapsed_ms = sample.timestamp_ms.saturating_sub(self.start.timestamp_ms);
        let velocity_px_per_ms = if elapsed_ms == 0 {
            0.0
        } else {
            delta.length() / elapsed_ms as f32
        };
        PointerRelease {
            delta,
            elapsed_ms,
            velocity_px_per_ms,
        }
    }
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    tracked: Option<Tracked>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn pointer(&self) -> Option<PointerId> {
        self.tracked.map(|t| t.pointer)
    }

    pub fn start(&self) -> Option<PointerSample> {
        self.tracked.map(|t| t.start)
    }

    pub fn last(&self) -> Option<PointerSample> {
        self.tracked.map(|t| t.last)
    }

    pub fn begin(&mut self, pointer: PointerId, sample: PointerSample) -> Result<()> {
        if self.tracked.is_some() {
            return Err(InteractionError::ConcurrentGestureIgnored);
        }
        self.tracked = Some(Tracked {
            pointer,
            start: sample,
            last: sample,
        });
        Ok(())
    }

    /// Delta since `begin`.
    pub fn update(&mut self, pointer: PointerId, sample: PointerSample) -> Result<PointerDelta> {
        let tracked = self.owned_mut(pointer)?;
        tracked.last = sample;
        Ok(tracked.delta_to(sample))
    }

    pub fn end(&mut self, pointer: PointerId, sample: PointerSample) -> Result<PointerRelease> {
        let release = self.owned_mut(pointer)?.release_at(sample);
        self.tracked = None;
        Ok(release)
    }

    /// Ends the session at the last known sample, for releases that never
    /// delivered their own coordinates.
    pub fn cancel(&mut self) -> Option<PointerRelease> {
        let tracked = self.tracked.take()?;
        Some(tracked.release_at(tracked.last))
    }

    fn owned_mut(&mut self, pointer: PointerId) -> Result<&mut Tracked> {
        match self.tracked.as_mut() {
            None => Err(InteractionError::NotTracking),
            Some(t) if t.pointer != pointer => Err(InteractionError::ConcurrentGestureIgnored),
            Some(t) => Ok(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer_tracker.rs"]
mod tests;
