//! Auto-advancing, swipeable slide carousel.

pub mod controller;
pub mod view;

pub use controller::{CarouselController, CarouselEvent, CarouselOutput, ChangeCause};
pub use view::CarouselViewState;

/// One slide. The sequence is owned by the caller and read-only to the
/// controller, which only needs its length.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide<T> {
    pub index: usize,
    pub content: T,
}

impl<T> Slide<T> {
    pub fn sequence(contents: impl IntoIterator<Item = T>) -> Vec<Slide<T>> {
        contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| Slide { index, content })
            .collect()
    }
}
