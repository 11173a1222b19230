//! Cancellable repeating timer, polled by the host loop.
//!
//! The scheduler never owns a thread or callback; it keeps the next deadline
//! and reports when it has passed. Suspending drops the deadline entirely, so
//! a resume always schedules from the resume moment and no backlog of ticks
//! can build up.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SchedulerState {
    Stopped,
    Running { next_due_ms: u64 },
    Suspended,
}

#[derive(Debug)]
pub struct AutoplayScheduler {
    interval_ms: u64,
    state: SchedulerState,
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self {
            interval_ms: 0,
            state: SchedulerState::Stopped,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }

    pub fn is_suspended(&self) -> bool {
        self.state == SchedulerState::Suspended
    }

    pub fn is_stopped(&self) -> bool {
        self.state == SchedulerState::Stopped
    }

    /// (Re)start with a fresh schedule. An interval of 0 leaves it stopped.
    pub fn start(&mut self, interval_ms: u64, now_ms: u64) {
        self.interval_ms = interval_ms;
        if interval_ms == 0 {
            self.state = SchedulerState::Stopped;
            return;
        }
        self.state = SchedulerState::Running {
            next_due_ms: now_ms.saturating_add(interval_ms),
        };
        tracing::debug!(interval_ms, "autoplay started");
    }

    pub fn stop(&mut self) {
        if self.state != SchedulerState::Stopped {
            tracing::debug!("autoplay stopped");
        }
        self.state = SchedulerState::Stopped;
    }

    pub fn suspend(&mut self) {
        if self.is_running() {
            self.state = SchedulerState::Suspended;
            tracing::debug!("autoplay suspended");
        }
    }

    pub fn resume(&mut self, now_ms: u64) {
        if self.is_suspended() {
            self.state = SchedulerState::Running {
                next_due_ms: now_ms.saturating_add(self.interval_ms),
            };
            tracing::debug!("autoplay resumed");
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        match self.state {
            SchedulerState::Running { next_due_ms } => Some(next_due_ms),
            _ => None,
        }
    }

    /// Returns true when a tick is due. At most one tick per poll; the next
    /// deadline is measured from `now_ms` so a late poll never catches up.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let SchedulerState::Running { next_due_ms } = self.state else {
            return false;
        };
        if now_ms < next_due_ms {
            return false;
        }

        let overshoot = now_ms - next_due_ms;
        if overshoot > self.interval_ms {
            tracing::debug!(overshoot_ms = overshoot, "autoplay tick overshoot");
        }
        self.state = SchedulerState::Running {
            next_due_ms: now_ms.saturating_add(self.interval_ms),
        };
        true
    }
}

impl Default for AutoplayScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/unit/autoplay.rs"]
mod tests;
