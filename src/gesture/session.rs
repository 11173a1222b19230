//! Single-axis swipe session.
//!
//! `Idle -> Active -> (commit | cancel) -> Settling -> Idle`. While active the
//! offset is the raw delta along the drag axis. On release the offset is
//! compared against a fraction of the live track length; either way the offset
//! then eases back to rest.

use super::easing::Easing;
use super::settle::SettleAnimation;
use super::FRAME_INTERVAL_MS;
use crate::core::{Axis, InteractionError, PointerEvent, PointerPhase, PointerSample, Result};
use crate::input::{PointerRelease, PointerTracker};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    Active {
        start: PointerSample,
        last: PointerSample,
        axis_delta: f32,
    },
    Settling {
        target_offset: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn apply(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Step::Previous => (index + len - 1) % len,
            Step::Next => (index + 1) % len,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureResolution {
    Committed { step: Step, release: PointerRelease },
    Cancelled { release: PointerRelease },
}

impl GestureResolution {
    pub fn step(&self) -> Option<Step> {
        match self {
            GestureResolution::Committed { step, .. } => Some(*step),
            GestureResolution::Cancelled { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct GestureSession {
    tracker: PointerTracker,
    axis: Axis,
    commit_fraction: f32,
    settle_duration_ms: u64,
    easing: Easing,
    offset_px: f32,
    settle: Option<SettleAnimation>,
}

impl GestureSession {
    pub fn new(axis: Axis, commit_fraction: f32, settle_duration_ms: u64) -> Self {
        Self {
            tracker: PointerTracker::new(),
            axis,
            commit_fraction,
            settle_duration_ms,
            easing: Easing::Ease,
            offset_px: 0.0,
            settle: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn offset_px(&self) -> f32 {
        self.offset_px
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn state(&self) -> GestureState {
        if let (Some(start), Some(last)) = (self.tracker.start(), self.tracker.last()) {
            return GestureState::Active {
                start,
                last,
                axis_delta: self.offset_px,
            };
        }
        if self.settle.is_some() {
            return GestureState::Settling { target_offset: 0.0 };
        }
        GestureState::Idle
    }

    /// An unmeasured track (length <= 0) never commits.
    pub fn commit_threshold_px(&self, track_length: f32) -> f32 {
        if track_length.is_nan() || track_length <= 0.0 {
            return f32::INFINITY;
        }
        self.commit_fraction * track_length
    }

    /// Start tracking. A press while another pointer is active is refused.
    /// Grabbing during a settle snaps the old offset to rest.
    pub fn press(&mut self, event: &PointerEvent) -> Result<()> {
        self.tracker.begin(event.pointer, event.sample)?;
        self.settle = None;
        self.offset_px = 0.0;
        tracing::debug!(x = event.sample.x, y = event.sample.y, "gesture active");
        Ok(())
    }

    pub fn drag(&mut self, event: &PointerEvent) -> Result<f32> {
        let delta = self.tracker.update(event.pointer, event.sample)?;
        self.offset_px = delta.along(self.axis);
        tracing::trace!(offset_px = self.offset_px, "gesture drag");
        Ok(self.offset_px)
    }

    /// Resolve the session. `Up` and `Cancel` release at the event's own
    /// sample; `Leave` releases at the last sample seen.
    pub fn release(&mut self, event: &PointerEvent, track_length: f32) -> Result<GestureResolution> {
        let release = match event.phase {
            PointerPhase::Leave => {
                match self.tracker.pointer() {
                    None => return Err(InteractionError::NotTracking),
                    Some(p) if p != event.pointer => {
                        return Err(InteractionError::ConcurrentGestureIgnored)
                    }
                    Some(_) => {}
                }
                self.tracker.cancel().ok_or(InteractionError::NotTracking)?
            }
            _ => self.tracker.end(event.pointer, event.sample)?,
        };

        let offset = release.delta.along(self.axis);
        let threshold = self.commit_threshold_px(track_length);
        let step = if offset != 0.0 && offset.abs() >= threshold {
            Some(if offset > 0.0 { Step::Previous } else { Step::Next })
        } else {
            None
        };

        // Re-express the offset relative to the new resting slot so the
        // rendered position does not jump when the index changes.
        let settle_from = match step {
            Some(Step::Previous) => offset - track_length,
            Some(Step::Next) => offset + track_length,
            None => offset,
        };
        self.start_settle(settle_from, event.sample.timestamp_ms);

        tracing::debug!(
            offset_px = offset,
            threshold_px = threshold,
            committed = step.is_some(),
            "gesture released"
        );

        Ok(match step {
            Some(step) => GestureResolution::Committed { step, release },
            None => GestureResolution::Cancelled { release },
        })
    }

    fn start_settle(&mut self, from: f32, now_ms: u64) {
        if from == 0.0 || self.settle_duration_ms == 0 {
            self.settle = None;
            self.offset_px = 0.0;
            return;
        }
        self.settle = Some(
            SettleAnimation::new(from, now_ms, self.settle_duration_ms).with_easing(self.easing),
        );
        self.offset_px = from;
    }

    /// Advance the settle animation. Returns whether the offset changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(settle) = self.settle else {
            return false;
        };
        let before = self.offset_px;
        if settle.is_finished(now_ms) {
            self.settle = None;
            self.offset_px = 0.0;
        } else {
            self.offset_px = settle.value_at(now_ms);
        }
        self.offset_px != before || self.settle.is_none()
    }

    pub fn finish_settle(&mut self) -> bool {
        if self.settle.take().is_some() {
            self.offset_px = 0.0;
            return true;
        }
        false
    }

    pub fn next_frame_at(&self, now_ms: u64) -> Option<u64> {
        self.settle
            .map(|s| now_ms.saturating_add(FRAME_INTERVAL_MS).min(s.ends_at_ms().max(now_ms)))
    }

    pub fn reset(&mut self) {
        self.tracker = PointerTracker::new();
        self.settle = None;
        self.offset_px = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/session.rs"]
mod tests;
