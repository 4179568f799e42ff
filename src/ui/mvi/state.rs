//! Marker trait for UI state.

/// Snapshot holding everything a view needs. `Default` lets owners take the
/// state out with `std::mem::take` while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
