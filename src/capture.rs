//! Timeout-wrapped selection and clipboard reads.
//!
//! Clipboard reads can block indefinitely when the selection owner is wedged
//! (seen on X11), so each read runs on a short-lived worker thread and the
//! caller waits on a channel with a timeout. A read that overruns is reported
//! as "no text" rather than hanging the tool.

use std::sync::mpsc;
use std::time::Duration;

use tracing::warn;

use crate::system;

/// Max time to wait for the system to hand back selected or clipboard text.
const CAPTURE_TIMEOUT_MS: u64 = 1200;

fn read_with_timeout<F>(source: &'static str, timeout: Duration, reader: F) -> Option<String>
where
    F: FnOnce() -> Option<String> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(reader());
    });

    match rx.recv_timeout(timeout) {
        Ok(text) => text,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!(
                source,
                timeout_ms = timeout.as_millis() as u64,
                "Text capture timed out"
            );
            None
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            warn!(source, "Text capture worker disconnected");
            None
        }
    }
}

/// The currently selected text, captured via the platform's selection
/// mechanism. Runs under the watchdog timeout.
pub fn selected_text() -> Option<String> {
    read_with_timeout(
        "selection",
        Duration::from_millis(CAPTURE_TIMEOUT_MS),
        system::get_selected_text,
    )
}

/// The current clipboard text. Runs under the watchdog timeout.
pub fn clipboard_text() -> Option<String> {
    read_with_timeout(
        "clipboard",
        Duration::from_millis(CAPTURE_TIMEOUT_MS),
        system::get_clipboard_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_timeout_returns_value() {
        let result = read_with_timeout("test", Duration::from_millis(500), || {
            Some("captured".to_string())
        });
        assert_eq!(result.as_deref(), Some("captured"));
    }

    #[test]
    fn test_read_with_timeout_passes_through_none() {
        let result = read_with_timeout("test", Duration::from_millis(500), || None);
        assert_eq!(result, None);
    }

    #[test]
    fn test_read_with_timeout_gives_up_on_slow_reader() {
        let result = read_with_timeout("test", Duration::from_millis(50), || {
            std::thread::sleep(Duration::from_millis(500));
            Some("too late".to_string())
        });
        assert_eq!(result, None);
    }
}
