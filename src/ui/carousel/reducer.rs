//! Reducer for the carousel.

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::CarouselState;

/// Pure carousel transitions. Re-arming the autoplay timer and redrawing
/// are done by [`super::Carousel`] after the state changes.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::GoTo { index } => navigate(state, index),
            CarouselIntent::Next => {
                let index = state.next_index() as i64;
                navigate(state, index)
            }
            CarouselIntent::Previous => {
                let index = state.previous_index() as i64;
                navigate(state, index)
            }

            CarouselIntent::Pause => CarouselState {
                is_playing: false,
                ..state
            },
            CarouselIntent::Resume => CarouselState {
                is_playing: true,
                ..state
            },
            CarouselIntent::Toggle => CarouselState {
                is_playing: !state.is_playing,
                ..state
            },

            CarouselIntent::SetQuantity { value } => CarouselState {
                quantity: value.max(1) as u64,
                quantity_dirty: true,
                ..state
            },
            CarouselIntent::IncreaseQuantity => CarouselState {
                quantity: state.quantity.saturating_add(1),
                quantity_dirty: true,
                ..state
            },
            CarouselIntent::DecreaseQuantity => {
                if state.quantity > 1 {
                    CarouselState {
                        quantity: state.quantity - 1,
                        quantity_dirty: true,
                        ..state
                    }
                } else {
                    state
                }
            }
            CarouselIntent::ResetQuantity => reset_quantity(state),
        }
    }
}

fn navigate(state: CarouselState, index: i64) -> CarouselState {
    let current_index = state.wrap(index);
    reset_quantity(CarouselState {
        current_index,
        ..state
    })
}

fn reset_quantity(state: CarouselState) -> CarouselState {
    CarouselState {
        quantity: 1,
        quantity_dirty: false,
        ..state
    }
}
