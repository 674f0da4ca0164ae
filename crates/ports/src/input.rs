// crates/ports/src/input.rs
use serde::{Deserialize, Serialize};
use word_counter_domain::SelectionRect;

/// User actions that may change what is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse released; carries the current selection text and its bounding box.
    Selection { text: String, rect: SelectionRect },
    /// Mouse pressed; a new selection is starting.
    PointerDown,
    /// Content of a text-entry field changed (keystroke or paste).
    TextChanged(String),
}
