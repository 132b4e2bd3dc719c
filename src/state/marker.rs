use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MARKER_HALF_SIZE_PX;

/// Style tag that gives a marker its round shape and animation.
pub const STYLE_CIRCLE: &str = "circle";
/// Style tag that centers the marker's label.
pub const STYLE_FLEX: &str = "flex";

/// A click location in viewport-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl ClickPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.client_x.is_finite() && self.client_y.is_finite()
    }
}

/// Top-left corner of a marker, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarkerPosition {
    pub left: f64,
    pub top: f64,
}

impl MarkerPosition {
    /// Position a marker so its center sits on the click point.
    pub fn centered_on(point: ClickPoint) -> Self {
        Self {
            left: point.client_x - MARKER_HALF_SIZE_PX,
            top: point.client_y - MARKER_HALF_SIZE_PX,
        }
    }

    /// Inline `left` value, e.g. `"75px"`.
    pub fn left_css(&self) -> String {
        format!("{}px", self.left)
    }

    /// Inline `top` value, e.g. `"75px"`.
    pub fn top_css(&self) -> String {
        format!("{}px", self.top)
    }
}

/// A transient click marker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    /// Unique identifier, used to remove exactly this marker
    pub id: Uuid,
    /// Top-left corner in pixels
    pub position: MarkerPosition,
    /// Background color (hex string, e.g., "#A0C3F1")
    pub color: String,
    /// Visible text
    pub label: String,
    /// Style tags, in the order they were applied
    pub classes: Vec<String>,
}

impl Marker {
    /// Create an untagged marker centered on the click point
    pub fn new(point: ClickPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: MarkerPosition::centered_on(point),
            color: String::new(),
            label: String::new(),
            classes: Vec::new(),
        }
    }

    /// Append a style tag unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space-separated tags for the `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}
