/// Read-only snapshot for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselViewState {
    pub active_index: usize,
    pub slide_count: usize,
    pub track_width: f32,
    /// 0 whenever not dragging and no settle is in flight.
    pub drag_offset_px: f32,
    pub is_dragging: bool,
    pub is_settling: bool,
    pub is_autoplay_suspended: bool,
}

impl CarouselViewState {
    /// Horizontal scroll position of the slide strip. Dragging left (negative
    /// offset) moves toward the next slide.
    pub fn visual_position_px(&self) -> f32 {
        self.active_index as f32 * self.track_width - self.drag_offset_px
    }

    /// One flag per slide, set for the active one.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.slide_count).map(move |i| i == self.active_index)
    }
}
