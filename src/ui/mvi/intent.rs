//! Marker trait for intents.

/// A user action (click, key, drag) or system event (timer fire) that a
/// reducer turns into a new state.
pub trait Intent: Send + 'static {}
