use super::view::CarouselViewState;
use super::Slide;
use crate::autoplay::AutoplayScheduler;
use crate::config::InteractionConfig;
use crate::core::{InteractionError, PointerEvent, PointerPhase, Result};
use crate::gesture::{GestureResolution, GestureSession, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeCause {
    Swipe,
    Autoplay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    IndexChanged { index: usize, cause: ChangeCause },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselOutput {
    pub events: Vec<CarouselEvent>,
    pub needs_redraw: bool,
    /// Misuse that was absorbed instead of changing state.
    pub recovered: Option<InteractionError>,
}

impl CarouselOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    fn recovered(err: InteractionError) -> Self {
        tracing::debug!(error = %err, "carousel input recovered");
        Self {
            recovered: Some(err),
            ..Self::default()
        }
    }

    fn merge(&mut self, other: CarouselOutput) {
        self.events.extend(other.events);
        self.needs_redraw |= other.needs_redraw;
        if self.recovered.is_none() {
            self.recovered = other.recovered;
        }
    }

    pub fn index_changes(&self) -> impl Iterator<Item = usize> + '_ {
        self.events.iter().map(|e| match e {
            CarouselEvent::IndexChanged { index, .. } => *index,
        })
    }
}

/// Drives one active index over a fixed number of slides from swipes and
/// autoplay ticks.
#[derive(Debug)]
pub struct CarouselController {
    slide_count: usize,
    active_index: usize,
    track_width: f32,
    gesture: GestureSession,
    autoplay: AutoplayScheduler,
    disposed: bool,
}

impl CarouselController {
    /// Validates `config` and starts autoplay at `now_ms`.
    pub fn new(config: &InteractionConfig, slide_count: usize, now_ms: u64) -> Result<Self> {
        config.validate()?;
        let mut controller = Self {
            slide_count: 0,
            active_index: 0,
            track_width: 0.0,
            gesture: GestureSession::new(
                config.drag_axis,
                config.swipe_commit_threshold_fraction,
                config.settle_duration_ms,
            )
            .with_easing(config.settle_easing),
            autoplay: AutoplayScheduler::new(),
            disposed: false,
        };
        controller.configure(slide_count, config.autoplay_interval_ms, now_ms)?;
        Ok(controller)
    }

    pub fn for_slides<T>(
        config: &InteractionConfig,
        slides: &[Slide<T>],
        now_ms: u64,
    ) -> Result<Self> {
        Self::new(config, slides.len(), now_ms)
    }

    /// Set the slide count and tick rate. Restarts autoplay from `now_ms`;
    /// an index that no longer exists goes back to the first slide.
    pub fn configure(
        &mut self,
        slide_count: usize,
        autoplay_interval_ms: u64,
        now_ms: u64,
    ) -> Result<()> {
        if slide_count < 1 {
            return Err(InteractionError::invalid_configuration(
                "carousel needs at least one slide",
            ));
        }
        if autoplay_interval_ms == 0 {
            return Err(InteractionError::invalid_configuration(
                "autoplay interval must be > 0",
            ));
        }

        self.slide_count = slide_count;
        if self.active_index >= slide_count {
            self.active_index = 0;
        }
        self.gesture.reset();
        self.autoplay.start(autoplay_interval_ms, now_ms);
        tracing::debug!(slide_count, autoplay_interval_ms, "carousel configured");
        Ok(())
    }

    /// Live measured length of the track along the drag axis.
    pub fn set_track_width(&mut self, px: f32) {
        self.track_width = if px.is_finite() { px.max(0.0) } else { 0.0 };
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn current_view(&self) -> CarouselViewState {
        CarouselViewState {
            active_index: self.active_index,
            slide_count: self.slide_count,
            track_width: self.track_width,
            drag_offset_px: self.gesture.offset_px(),
            is_dragging: self.gesture.is_active(),
            is_settling: self.gesture.is_settling(),
            is_autoplay_suspended: self.autoplay.is_suspended(),
        }
    }

    pub fn on_pointer(&mut self, event: &PointerEvent) -> CarouselOutput {
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(event),
            PointerPhase::Drag => self.on_pointer_move(event),
            PointerPhase::Hover => CarouselOutput::empty(),
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave => {
                self.on_pointer_up(event)
            }
        }
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> CarouselOutput {
        if self.disposed {
            return CarouselOutput::empty();
        }
        if let Err(err) = self.gesture.press(event) {
            return CarouselOutput::recovered(err);
        }
        self.autoplay.suspend();
        CarouselOutput {
            needs_redraw: true,
            ..CarouselOutput::default()
        }
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> CarouselOutput {
        if self.disposed {
            return CarouselOutput::empty();
        }
        match self.gesture.drag(event) {
            Ok(_) => CarouselOutput {
                needs_redraw: true,
                ..CarouselOutput::default()
            },
            Err(InteractionError::NotTracking) => {
                // A contact move with no press seen: start fresh from here.
                let mut out = self.on_pointer_down(event);
                if out.recovered.is_none() {
                    out.recovered = Some(InteractionError::NotTracking);
                }
                out
            }
            Err(err) => CarouselOutput::recovered(err),
        }
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> CarouselOutput {
        if self.disposed {
            return CarouselOutput::empty();
        }
        let resolution = match self.gesture.release(event, self.track_width) {
            Ok(resolution) => resolution,
            Err(err) => return CarouselOutput::recovered(err),
        };

        let mut out = CarouselOutput {
            needs_redraw: true,
            ..CarouselOutput::default()
        };
        if let GestureResolution::Committed { step, .. } = resolution {
            out.events.push(self.step(step, ChangeCause::Swipe));
        }
        self.autoplay.resume(event.sample.timestamp_ms);
        out
    }

    /// Autoplay advance. Ignored while a gesture holds the pointer.
    pub fn tick(&mut self) -> CarouselOutput {
        if self.disposed {
            return CarouselOutput::empty();
        }
        if self.gesture.is_active() {
            tracing::trace!("autoplay tick ignored during gesture");
            return CarouselOutput::empty();
        }
        self.gesture.finish_settle();
        CarouselOutput {
            events: vec![self.step(Step::Next, ChangeCause::Autoplay)],
            needs_redraw: true,
            recovered: None,
        }
    }

    /// Advance settle animation and autoplay to `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> CarouselOutput {
        if self.disposed {
            return CarouselOutput::empty();
        }
        let mut out = CarouselOutput {
            needs_redraw: self.gesture.poll(now_ms),
            ..CarouselOutput::default()
        };
        if self.autoplay.poll(now_ms) {
            out.merge(self.tick());
        }
        out
    }

    /// Earliest time the host should call `poll` again.
    pub fn next_deadline(&self, now_ms: u64) -> Option<u64> {
        if self.disposed {
            return None;
        }
        match (self.gesture.next_frame_at(now_ms), self.autoplay.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel the timer and any settle in flight. Nothing fires afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.autoplay.stop();
        self.gesture.reset();
        self.disposed = true;
        tracing::debug!("carousel disposed");
    }

    fn step(&mut self, step: Step, cause: ChangeCause) -> CarouselEvent {
        self.active_index = step.apply(self.active_index, self.slide_count);
        tracing::debug!(index = self.active_index, ?cause, "carousel index changed");
        CarouselEvent::IndexChanged {
            index: self.active_index,
            cause,
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;
