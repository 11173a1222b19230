//! Offset animation back to rest after a gesture ends.

use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleAnimation {
    from: f32,
    started_at_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl SettleAnimation {
    pub fn new(from: f32, started_at_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            started_at_ms,
            duration_ms,
            easing: Easing::Ease,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    fn fraction(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    /// Offset at `now_ms`; reaches exactly 0 once finished.
    pub fn value_at(&self, now_ms: u64) -> f32 {
        if self.is_finished(now_ms) {
            return 0.0;
        }
        self.from * (1.0 - self.easing.transform(self.fraction(now_ms)))
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.fraction(now_ms) >= 1.0
    }

    pub fn ends_at_ms(&self) -> u64 {
        self.started_at_ms.saturating_add(self.duration_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/settle.rs"]
mod tests;
