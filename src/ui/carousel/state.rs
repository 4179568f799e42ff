//! State for the carousel.

use crate::ui::mvi::UiState;

/// Position, playback and quantity of one carousel instance.
///
/// Two independent axes: `current_index` cycles through `0..slide_count`,
/// `is_playing` flips between autoplay and paused. Quantity belongs to the
/// slide currently shown and goes back to 1 whenever the slide changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    pub slide_count: usize,
    pub current_index: usize,
    pub is_playing: bool,
    pub quantity: u64,
    /// Set once the user changed the quantity on the current slide.
    pub quantity_dirty: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            slide_count: 0,
            current_index: 0,
            is_playing: false,
            quantity: 1,
            quantity_dirty: false,
        }
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(slide_count: usize, start_index: i64, is_playing: bool) -> Self {
        let mut state = Self {
            slide_count,
            is_playing,
            ..Self::default()
        };
        state.current_index = state.wrap(start_index);
        state
    }

    /// `((n mod N) + N) mod N`. Zero when there are no slides.
    pub fn wrap(&self, n: i64) -> usize {
        if self.slide_count == 0 {
            return 0;
        }
        n.rem_euclid(self.slide_count as i64) as usize
    }

    pub fn next_index(&self) -> usize {
        self.wrap(self.current_index as i64 + 1)
    }

    pub fn previous_index(&self) -> usize {
        self.wrap(self.current_index as i64 - 1)
    }
}
