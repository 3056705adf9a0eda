//! Windows selection capture via Ctrl+C simulation.
//!
//! Windows offers no API for reading the foreground window's selection, so
//! the keystroke is synthesized with `enigo` and the result read back from
//! the clipboard.

use super::{poll_for_copied_text, restore_clipboard, trimmed_non_empty, POLL_TIMEOUT_MS};
use arboard::Clipboard;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pause after sending the keystroke so the foreground app can process it.
const KEYSTROKE_DELAY_MS: u64 = 50;

/// Sends Ctrl+C to the foreground window.
fn simulate_ctrl_c() -> Result<(), String> {
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};

    debug!("Simulating Ctrl+C via enigo");

    let mut enigo = Enigo::new(&Settings::default()).map_err(|e| e.to_string())?;

    enigo
        .key(Key::Control, Direction::Press)
        .map_err(|e| e.to_string())?;
    enigo
        .key(Key::Unicode('c'), Direction::Click)
        .map_err(|e| e.to_string())?;
    enigo
        .key(Key::Control, Direction::Release)
        .map_err(|e| e.to_string())?;

    std::thread::sleep(Duration::from_millis(KEYSTROKE_DELAY_MS));
    Ok(())
}

/// Reads the current selection by simulating Ctrl+C.
pub(super) fn get_selected_text_windows() -> Option<String> {
    debug!("Capturing selected text via Ctrl+C simulation");

    let mut clipboard = match Clipboard::new() {
        Ok(cb) => cb,
        Err(e) => {
            warn!(error = %e, "Failed to open clipboard");
            return None;
        }
    };

    let original = clipboard.get_text().ok();

    // Clearing first lets the poll distinguish "nothing selected" from stale contents.
    if let Err(e) = clipboard.clear() {
        warn!(error = %e, "Failed to clear clipboard before capture");
    }

    if let Err(e) = simulate_ctrl_c() {
        warn!(error = %e, "Failed to simulate Ctrl+C");
        restore_clipboard(original);
        return None;
    }

    let copied = poll_for_copied_text(Duration::from_millis(POLL_TIMEOUT_MS));

    if let Some(text) = &copied {
        info!(chars = text.len(), "Captured selected text");
    } else {
        debug!("No selection, or the clipboard never updated");
    }

    restore_clipboard(original);
    copied.and_then(|text| trimmed_non_empty(text, "selected text"))
}
