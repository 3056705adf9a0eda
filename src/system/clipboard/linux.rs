//! Linux clipboard and selection reading.
//!
//! X11 and Wayland expose the live selection through the PRIMARY buffer, so
//! no keystroke simulation is needed here.

use super::trimmed_non_empty;
use arboard::{Clipboard, GetExtLinux, LinuxClipboardKind};
use tracing::debug;

/// Reads the current selection: PRIMARY first, clipboard as fallback.
pub(super) fn get_selected_text_linux() -> Option<String> {
    debug!("Reading selection (PRIMARY, falling back to clipboard)");

    let mut clipboard = Clipboard::new().ok()?;

    if let Ok(text) = clipboard
        .get()
        .clipboard(LinuxClipboardKind::Primary)
        .text()
    {
        if let Some(result) = trimmed_non_empty(text, "PRIMARY selection") {
            return Some(result);
        }
        debug!("PRIMARY selection is empty, falling back to clipboard");
    } else {
        debug!("PRIMARY selection unavailable, falling back to clipboard");
    }

    clipboard
        .get_text()
        .ok()
        .and_then(|text| trimmed_non_empty(text, "clipboard (fallback)"))
}

/// Reads the explicit Clipboard buffer so the result matches Ctrl+C, not PRIMARY.
pub(super) fn get_clipboard_text_linux() -> Option<String> {
    let mut clipboard = Clipboard::new().ok()?;
    clipboard
        .get()
        .clipboard(LinuxClipboardKind::Clipboard)
        .text()
        .ok()
        .and_then(|text| trimmed_non_empty(text, "clipboard"))
}
