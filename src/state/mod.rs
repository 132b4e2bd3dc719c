//! State module
//!
//! Plain data for the click effect:
//! - Marker: one transient element spawned per click
//! - ClickPoint / MarkerPosition: click input and derived placement

mod marker;

pub use marker::*;
