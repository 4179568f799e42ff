//! Carousel feature module.
//!
//! Cycles through a fixed list of slides, either on an autoplay timer or on
//! user input, and keeps a per-slide quantity and price display in sync.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Slide position, play state and quantity
//! - `intent.rs` - Navigation, playback and quantity transitions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Owns the reducer state, the autoplay timer and the view
//!
//! Input arbitration lives next to the controller: `gesture.rs` turns
//! press/release positions into swipes, `keys.rs` names the bound keys, and
//! `view.rs` is the rendering contract.

mod controller;
mod gesture;
mod intent;
mod keys;
mod reducer;
mod state;
mod view;

pub use controller::{Carousel, CarouselError, CarouselSettings, InputEvent, Outcome};
pub use gesture::{GestureKind, SwipeDirection, SwipeTracker};
pub use intent::CarouselIntent;
pub use keys::{Key, KeyResponse};
pub use reducer::CarouselReducer;
pub use state::CarouselState;
pub use view::CarouselView;
