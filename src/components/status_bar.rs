use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(ready: bool, live_markers: usize, pending_removals: usize) -> Element {
    let status = if ready { "Click anywhere" } else { "Loading" };
    rsx! {
        div {
            style: "position: fixed; left: 0; right: 0; bottom: 0; display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM}; pointer-events: none;",
            span { "{status}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{live_markers} live" }
                span { "{pending_removals} pending" }
                span { "Esc clears" }
            }
        }
    }
}
