//! Hotkey system
//!
//! Maps key events on the page container to semantic actions.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all actions that can be triggered by hotkeys
//! - **handle_hotkey()**: Dispatch function from key events to actions
//!
//! The page has no text inputs, so every binding is always active.

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Remove every live marker and cancel its timer
    ClearMarkers,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key
    NoMatch,
}

/// Maps a key event to an action.
pub fn handle_hotkey(key: &Key) -> HotkeyResult {
    match key {
        Key::Escape => HotkeyResult::Action(HotkeyAction::ClearMarkers),
        _ => HotkeyResult::NoMatch,
    }
}
