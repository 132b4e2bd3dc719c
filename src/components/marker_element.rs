use dioxus::prelude::*;

use crate::state::Marker;

/// One click marker. Shape and animation come from the `circle` and `flex`
/// rules in the page stylesheet; only placement, color, and text are inline.
#[component]
pub fn MarkerElement(marker: Marker) -> Element {
    let class = marker.class_attr();
    let left = marker.position.left_css();
    let top = marker.position.top_css();
    let color = marker.color.clone();

    rsx! {
        div {
            class: "{class}",
            style: "left: {left}; top: {top}; background: {color};",
            "{marker.label}"
        }
    }
}
