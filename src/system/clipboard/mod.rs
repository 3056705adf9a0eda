//! Clipboard and selection reading.
//!
//! Selection capture works differently per platform. macOS and Windows have
//! no API for reading another application's selection, so a copy keystroke is
//! simulated and the result read back from the clipboard (the user's original
//! clipboard contents are restored afterwards). Linux exposes the selection
//! directly through the PRIMARY buffer.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use tracing::debug;

#[cfg(any(target_os = "macos", target_os = "windows"))]
use arboard::Clipboard;
#[cfg(any(target_os = "macos", target_os = "windows"))]
use std::time::Duration;

/// How long to keep polling for the copied selection to appear.
#[cfg(any(target_os = "macos", target_os = "windows"))]
const POLL_TIMEOUT_MS: u64 = 400;
/// Poll step while waiting for the focused application to publish the copy.
#[cfg(any(target_os = "macos", target_os = "windows"))]
const POLL_INTERVAL_MS: u64 = 50;

/// Polls the clipboard until it holds non-empty text or `max_wait` elapses.
/// Used after a simulated Cmd+C / Ctrl+C.
#[cfg(any(target_os = "macos", target_os = "windows"))]
fn poll_for_copied_text(max_wait: Duration) -> Option<String> {
    let step = Duration::from_millis(POLL_INTERVAL_MS);
    let mut waited = Duration::ZERO;

    while waited < max_wait {
        std::thread::sleep(step);
        waited += step;

        if let Some(text) = Clipboard::new()
            .and_then(|mut cb| cb.get_text())
            .ok()
            .filter(|t| !t.is_empty())
        {
            debug!(waited_ms = waited.as_millis(), "Clipboard received the copy");
            return Some(text);
        }
    }

    debug!(
        timeout_ms = max_wait.as_millis(),
        "Clipboard never updated; giving up"
    );
    None
}

/// Puts the user's clipboard back the way it was before the simulated copy.
#[cfg(any(target_os = "macos", target_os = "windows"))]
fn restore_clipboard(original: Option<String>) {
    let Ok(mut clipboard) = Clipboard::new() else {
        tracing::warn!("Could not open clipboard to restore previous contents");
        return;
    };

    match original {
        Some(text) => {
            let len = text.len();
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!(error = %e, "Failed to restore previous clipboard contents");
            } else {
                debug!(chars = len, "Restored previous clipboard contents");
            }
        }
        None => {
            if let Err(e) = clipboard.clear() {
                tracing::warn!(error = %e, "Failed to clear clipboard after capture");
            } else {
                debug!("Cleared clipboard (it was empty before capture)");
            }
        }
    }
}

/// Trims the text and returns it if anything is left. Only the length is
/// logged so selection contents (passwords, for instance) never reach logs.
fn trimmed_non_empty(text: String, source: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        debug!("{} is empty", source);
        None
    } else {
        debug!(len = trimmed.len(), "Captured text from {}", source);
        Some(trimmed.to_string())
    }
}

/// Reads the current clipboard text (whatever the last Ctrl+C / Cmd+C put there).
///
/// On Linux this reads the explicit Clipboard buffer, not PRIMARY, so it
/// matches what the user last copied. Returns `None` if the clipboard is
/// empty, holds no text, or cannot be opened.
pub fn get_clipboard_text() -> Option<String> {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        Clipboard::new()
            .ok()
            .and_then(|mut cb| cb.get_text().ok())
            .and_then(|t| trimmed_non_empty(t, "clipboard"))
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_clipboard_text_linux()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        tracing::warn!("Platform not supported for clipboard");
        None
    }
}

/// Reads the currently selected text.
///
/// - macOS: simulates Cmd+C (AppleScript), reads the clipboard, restores it
/// - Windows: simulates Ctrl+C (enigo), reads the clipboard, restores it
/// - Linux: PRIMARY selection, falling back to the clipboard
/// - anything else: `None`
pub fn get_selected_text() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        macos::get_selected_text_macos()
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_selected_text_linux()
    }

    #[cfg(target_os = "windows")]
    {
        windows::get_selected_text_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        tracing::warn!("Platform not supported for text selection");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_non_empty_trims_whitespace() {
        let result = trimmed_non_empty("  hello world \n".to_string(), "test");
        assert_eq!(result.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_trimmed_non_empty_rejects_blank() {
        assert_eq!(trimmed_non_empty(String::new(), "test"), None);
        assert_eq!(trimmed_non_empty("   \n\t".to_string(), "test"), None);
    }

    #[test]
    fn test_trimmed_non_empty_keeps_interior_newlines() {
        let result = trimmed_non_empty("line one\nline two\n".to_string(), "test");
        assert_eq!(result.as_deref(), Some("line one\nline two"));
    }
}
