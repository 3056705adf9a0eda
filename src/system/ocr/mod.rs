//! OCR (Optical Character Recognition) over image files.
//!
//! The engine is Tesseract, driven through its command-line executable; it is
//! treated as an opaque external collaborator, the same way the selection
//! tools treat the OS clipboard.

mod tesseract;

pub use tesseract::extract_text;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error(
        "tesseract executable not found; install it first (e.g. `apt install tesseract-ocr` or `brew install tesseract`)"
    )]
    EngineNotFound,
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("failed to decode image: {0}")]
    ImageDecode(String),
    #[error("no text detected in image")]
    NoTextDetected,
}

/// A recognized word with its pixel bounding box and confidence (0-100).
#[derive(Debug, Clone, Serialize)]
pub struct OcrWord {
    pub text: String,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub confidence: f32,
}

/// OCR output: the combined text plus per-word detail for `--json` consumers.
#[derive(Debug, Clone, Serialize)]
pub struct OcrResult {
    pub full_text: String,
    pub words: Vec<OcrWord>,
}

/// Builds the final result from the engine's raw text and word records.
/// Interior newlines are preserved; only trailing whitespace is dropped.
fn assemble(raw_text: &str, words: Vec<OcrWord>) -> Result<OcrResult, OcrError> {
    let full_text = raw_text.trim_end().to_string();
    if full_text.trim().is_empty() {
        return Err(OcrError::NoTextDetected);
    }
    Ok(OcrResult { full_text, words })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> OcrWord {
        OcrWord {
            text: text.to_string(),
            left: 0,
            top: 0,
            width: 10,
            height: 10,
            confidence: 90.0,
        }
    }

    #[test]
    fn test_assemble_trims_trailing_whitespace_only() {
        let result = assemble("first line\nsecond line\n\n", vec![word("first")]).unwrap();
        assert_eq!(result.full_text, "first line\nsecond line");
        assert_eq!(result.words.len(), 1);
    }

    #[test]
    fn test_assemble_empty_text_is_no_text_detected() {
        let err = assemble("  \n ", vec![]).unwrap_err();
        assert!(matches!(err, OcrError::NoTextDetected));
    }

    #[test]
    fn test_ocr_result_serializes_words() {
        let result = assemble("hi", vec![word("hi")]).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["full_text"], "hi");
        assert_eq!(json["words"][0]["text"], "hi");
        assert_eq!(json["words"][0]["confidence"], 90.0);
    }
}
