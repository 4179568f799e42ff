//! Intents for the carousel.

use crate::ui::mvi::Intent;

/// Transitions the carousel reducer understands.
///
/// Timer and view effects are not intents: the controller performs them
/// around each dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Show slide `index`, normalized into range. Resets the quantity.
    GoTo { index: i64 },
    Next,
    Previous,

    Pause,
    Resume,
    Toggle,

    /// Manual quantity entry. Values below 1 are clamped.
    SetQuantity { value: i64 },
    IncreaseQuantity,
    /// No-op at quantity 1.
    DecreaseQuantity,
    ResetQuantity,
}

impl Intent for CarouselIntent {}
