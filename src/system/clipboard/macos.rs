//! macOS selection capture via Cmd+C simulation.
//!
//! macOS offers no public API for reading another application's selection, so
//! the keystroke is sent with AppleScript to the frontmost application and the
//! result is read back from the clipboard. Requires Accessibility permission.

use super::{poll_for_copied_text, restore_clipboard, trimmed_non_empty, POLL_TIMEOUT_MS};
use arboard::Clipboard;
use macos_accessibility_client::accessibility::application_is_trusted_with_prompt;
use std::process::Command;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delay inside the AppleScript so focus settles before the keystroke lands.
const APPLESCRIPT_FOCUS_DELAY: f64 = 0.05;

/// Checks Accessibility permission, prompting the user to grant it if needed.
fn check_accessibility_permissions() -> bool {
    let trusted = application_is_trusted_with_prompt();
    if !trusted {
        warn!(
            "Accessibility permission not granted - enable it in System Settings > Privacy & Security > Accessibility"
        );
    }
    trusted
}

/// Sends Cmd+C to the frontmost application through `osascript`.
fn simulate_cmd_c() -> Result<(), String> {
    debug!("Simulating Cmd+C via AppleScript");

    let script = format!(
        r#"
        tell application "System Events"
            set frontApp to name of first application process whose frontmost is true
            delay {}
            keystroke "c" using command down
        end tell
    "#,
        APPLESCRIPT_FOCUS_DELAY
    );

    let output = Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
        .map_err(|e| format!("Failed to execute osascript: {}", e))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = if stderr.trim().is_empty() {
        format!(
            "AppleScript failed with exit code {}",
            output.status.code().unwrap_or(-1)
        )
    } else {
        format!("AppleScript failed: {}", stderr.trim())
    };
    Err(message)
}

/// Reads the current selection by simulating Cmd+C.
pub(super) fn get_selected_text_macos() -> Option<String> {
    debug!("Capturing selected text via Cmd+C simulation");

    if !check_accessibility_permissions() {
        warn!("Cannot capture selected text without Accessibility permission");
        return None;
    }

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

    if let Err(e) = simulate_cmd_c() {
        warn!(error = %e, "Failed to simulate Cmd+C");
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
