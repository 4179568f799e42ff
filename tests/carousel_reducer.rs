use carousel::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use carousel::ui::mvi::Reducer;

fn make_state(count: usize, index: i64) -> CarouselState {
    CarouselState::new(count, index, true)
}

#[test]
fn new_state_wraps_start_index() {
    assert_eq!(make_state(5, 7).current_index, 2);
    assert_eq!(make_state(5, -1).current_index, 4);
    assert_eq!(make_state(5, 0).quantity, 1);
}

#[test]
fn wrap_matches_euclidean_remainder() {
    let state = make_state(4, 0);
    for n in -20i64..=20 {
        assert_eq!(state.wrap(n) as i64, n.rem_euclid(4));
    }
}

#[test]
fn wrap_without_slides_is_zero() {
    let state = CarouselState::default();
    assert_eq!(state.wrap(42), 0);
    assert_eq!(state.next_index(), 0);
}

#[test]
fn neighbours_wrap() {
    let state = make_state(3, 2);
    assert_eq!(state.next_index(), 0);
    assert_eq!(state.previous_index(), 1);
}

#[test]
fn toggle_twice_restores_play_state() {
    let state = make_state(3, 0);
    let toggled = CarouselReducer::reduce(state.clone(), CarouselIntent::Toggle);
    assert!(!toggled.is_playing);
    let back = CarouselReducer::reduce(toggled, CarouselIntent::Toggle);
    assert_eq!(back, state);
}

#[test]
fn navigation_does_not_touch_play_state() {
    let paused = CarouselReducer::reduce(make_state(3, 0), CarouselIntent::Pause);
    let moved = CarouselReducer::reduce(paused, CarouselIntent::GoTo { index: 2 });
    assert_eq!(moved.current_index, 2);
    assert!(!moved.is_playing);
}

#[test]
fn quantity_steps() {
    let state = CarouselReducer::reduce(make_state(3, 0), CarouselIntent::IncreaseQuantity);
    let state = CarouselReducer::reduce(state, CarouselIntent::IncreaseQuantity);
    assert_eq!(state.quantity, 3);
    assert!(state.quantity_dirty);

    let state = CarouselReducer::reduce(state, CarouselIntent::DecreaseQuantity);
    assert_eq!(state.quantity, 2);

    let state = CarouselReducer::reduce(state, CarouselIntent::ResetQuantity);
    assert_eq!(state.quantity, 1);
    assert!(!state.quantity_dirty);
}

#[test]
fn decrease_at_one_is_a_no_op() {
    let state = make_state(3, 1);
    let new = CarouselReducer::reduce(state.clone(), CarouselIntent::DecreaseQuantity);
    assert_eq!(new, state);
}

#[test]
fn set_quantity_clamps_to_one() {
    let state = CarouselReducer::reduce(make_state(3, 0), CarouselIntent::SetQuantity { value: -3 });
    assert_eq!(state.quantity, 1);
    let state = CarouselReducer::reduce(state, CarouselIntent::SetQuantity { value: 12 });
    assert_eq!(state.quantity, 12);
}
