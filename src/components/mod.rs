//! UI components for the click page.
mod marker_element;
mod status_bar;

pub use marker_element::MarkerElement;
pub use status_bar::StatusBar;
