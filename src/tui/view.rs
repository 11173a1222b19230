#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

/// Which engine owns the pointer from press until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveArea {
    #[default]
    None,
    Carousel,
    Board,
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
