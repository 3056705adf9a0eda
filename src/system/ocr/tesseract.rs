//! Tesseract engine wrapper.

use std::path::Path;
use std::process::Command;

use rusty_tesseract::{Args, Image};
use tracing::{debug, info};

use super::{OcrError, OcrResult, OcrWord};

/// Word-level rows in Tesseract's TSV output (level 5).
const TSV_WORD_LEVEL: i32 = 5;

/// Checks that the `tesseract` executable is on PATH before handing work to it.
fn engine_available() -> bool {
    Command::new("tesseract").arg("--version").output().is_ok()
}

/// Recognizes text in the image at `path` using the given Tesseract language
/// list (codes joined with `+`, e.g. `eng+chi_tra`).
///
/// The image is decoded up front with the `image` crate so unreadable files
/// fail with a decode error instead of an opaque engine message.
pub fn extract_text(path: &Path, languages: &str) -> Result<OcrResult, OcrError> {
    debug!(path = %path.display(), languages, "Starting OCR");

    image::open(path).map_err(|e| OcrError::ImageDecode(e.to_string()))?;

    if !engine_available() {
        return Err(OcrError::EngineNotFound);
    }

    let img = Image::from_path(path).map_err(|e| OcrError::Engine(e.to_string()))?;
    let args = Args {
        lang: languages.to_string(),
        ..Args::default()
    };

    let text = rusty_tesseract::image_to_string(&img, &args)
        .map_err(|e| OcrError::Engine(e.to_string()))?;
    let data = rusty_tesseract::image_to_data(&img, &args)
        .map_err(|e| OcrError::Engine(e.to_string()))?;

    let words: Vec<OcrWord> = data
        .data
        .into_iter()
        .filter(|record| record.level == TSV_WORD_LEVEL && !record.text.trim().is_empty())
        .map(|record| OcrWord {
            text: record.text.trim().to_string(),
            left: record.left,
            top: record.top,
            width: record.width,
            height: record.height,
            confidence: record.conf,
        })
        .collect();

    let result = super::assemble(&text, words)?;
    info!(
        chars = result.full_text.len(),
        words = result.words.len(),
        "OCR completed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract_text_rejects_undecodable_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();
        file.write_all(b"this is not a png").unwrap();

        let err = extract_text(file.path(), "eng").unwrap_err();
        assert!(matches!(err, OcrError::ImageDecode(_)));
    }

    #[test]
    fn test_extract_text_rejects_missing_file() {
        let err = extract_text(Path::new("/nonexistent/image.png"), "eng").unwrap_err();
        assert!(matches!(err, OcrError::ImageDecode(_)));
    }
}
