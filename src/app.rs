//! Root application component
//!
//! The page container listens for clicks and hands them to the click effect
//! handler. The handler is only built once the container is mounted, so
//! clicks that land before the page is ready are ignored.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::{MarkerElement, StatusBar};
use crate::constants::*;
use crate::engine::effect::ClickEffectHandler;
use crate::engine::surface::MarkerBoard;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyResult};
use crate::state::{ClickPoint, Marker};

type Handler = Arc<ClickEffectHandler<MarkerBoard>>;

#[component]
pub fn App() -> Element {
    let board = use_hook(MarkerBoard::new);
    let mut handler = use_signal(|| None::<Handler>);
    let mut markers = use_signal(Vec::<Marker>::new);
    let mut pending_removals = use_signal(|| 0usize);

    // Mirror board mutations into render state.
    use_future({
        let board = board.clone();
        move || {
            let board = board.clone();
            async move {
                let mut revision = board.subscribe();
                loop {
                    markers.set(board.snapshot());
                    let pending = match &*handler.peek() {
                        Some(effect) => effect.pending_removals(),
                        None => 0,
                    };
                    pending_removals.set(pending);
                    if revision.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    use_drop({
        let board = board.clone();
        move || board.detach()
    });

    let mount_board = board.clone();
    let ready = handler.read().is_some();

    rsx! {
        style { {MARKER_STYLESHEET} }

        // Page container
        div {
            style: "
                position: fixed; top: 0; left: 0;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; user-select: none; outline: none;
            ",
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onmounted: move |_| {
                if handler.peek().is_some() {
                    return;
                }
                let effect = ClickEffectHandler::new(Arc::new(mount_board.clone()));
                handler.set(Some(Arc::new(effect)));
                tracing::info!("page ready, click effect attached");
            },
            onclick: move |e: MouseEvent| {
                let Some(effect) = handler() else {
                    return;
                };
                let coords = e.client_coordinates();
                if let Err(err) = effect.on_click(ClickPoint::new(coords.x, coords.y)) {
                    tracing::error!(%err, "click effect failed");
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                match handle_hotkey(&e.key()) {
                    HotkeyResult::Action(HotkeyAction::ClearMarkers) => {
                        e.prevent_default();
                        if let Some(effect) = handler() {
                            effect.clear_all();
                        }
                    }
                    HotkeyResult::NoMatch => {}
                }
            },

            for marker in markers() {
                MarkerElement { key: "{marker.id}", marker: marker.clone() }
            }

            StatusBar {
                ready: ready,
                live_markers: markers.read().len(),
                pending_removals: pending_removals(),
            }
        }
    }
}
