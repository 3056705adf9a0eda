//! System interactions (clipboard, selection capture, OCR)

mod clipboard;
pub mod ocr;

pub use clipboard::{get_clipboard_text, get_selected_text};
