//! Argument parsing for the two command-line tools.
//!
//! The surface is two flags and a positional, so parsing is done by hand;
//! usage errors exit with code 2 in the binaries.

use std::path::PathBuf;

use thiserror::Error;

/// Default Tesseract language list: English plus Traditional Chinese, the
/// languages these tools have always shipped with.
pub const DEFAULT_OCR_LANGUAGES: &str = "eng+chi_tra";

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("missing required <image_path> argument")]
    MissingImagePath,
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unexpected argument: {0}")]
    Unexpected(String),
    #[error("invalid language list: {0} (expected Tesseract codes joined with '+', e.g. eng+chi_tra)")]
    InvalidLanguages(String),
}

/// Outcome of parsing: either run with the parsed arguments, or show help.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<T> {
    Run(T),
    Help,
}

/// Arguments for `extract-text-from-image`.
#[derive(Debug, PartialEq, Eq)]
pub struct OcrArgs {
    pub image_path: PathBuf,
    pub languages: String,
    pub json: bool,
}

/// Arguments for `get-selected-text`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    pub clipboard: bool,
    pub wait: bool,
}

pub fn parse_ocr_args<I>(args: I) -> Result<Command<OcrArgs>, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut image_path: Option<PathBuf> = None;
    let mut languages = DEFAULT_OCR_LANGUAGES.to_string();
    let mut json = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => json = true,
            "--lang" => {
                let value = iter.next().ok_or(UsageError::MissingValue("--lang"))?;
                languages = validate_languages(&value)?;
            }
            s if s.starts_with('-') => return Err(UsageError::Unexpected(s.to_string())),
            _ => {
                if image_path.is_some() {
                    return Err(UsageError::Unexpected(arg.clone()));
                }
                image_path = Some(PathBuf::from(arg.clone()));
            }
        }
    }

    let image_path = image_path.ok_or(UsageError::MissingImagePath)?;
    Ok(Command::Run(OcrArgs {
        image_path,
        languages,
        json,
    }))
}

pub fn parse_selection_args<I>(args: I) -> Result<Command<SelectionArgs>, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = SelectionArgs::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--clipboard" => parsed.clipboard = true,
            "--wait" => parsed.wait = true,
            other => return Err(UsageError::Unexpected(other.to_string())),
        }
    }

    Ok(Command::Run(parsed))
}

/// A language list is Tesseract codes joined with `+` (e.g. `eng+chi_tra`).
fn validate_languages(value: &str) -> Result<String, UsageError> {
    let well_formed = !value.is_empty()
        && value.split('+').all(|code| {
            !code.is_empty()
                && code
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        });

    if well_formed {
        Ok(value.to_string())
    } else {
        Err(UsageError::InvalidLanguages(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ocr_args_defaults() {
        let parsed = parse_ocr_args(strings(&["photo.png"])).unwrap();
        assert_eq!(
            parsed,
            Command::Run(OcrArgs {
                image_path: PathBuf::from("photo.png"),
                languages: DEFAULT_OCR_LANGUAGES.to_string(),
                json: false,
            })
        );
    }

    #[test]
    fn test_ocr_args_lang_and_json() {
        let parsed = parse_ocr_args(strings(&["--lang", "eng+deu", "--json", "scan.jpg"])).unwrap();
        assert_eq!(
            parsed,
            Command::Run(OcrArgs {
                image_path: PathBuf::from("scan.jpg"),
                languages: "eng+deu".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_ocr_args_missing_path() {
        let err = parse_ocr_args(strings(&["--json"])).unwrap_err();
        assert!(matches!(err, UsageError::MissingImagePath));
    }

    #[test]
    fn test_ocr_args_lang_without_value() {
        let err = parse_ocr_args(strings(&["photo.png", "--lang"])).unwrap_err();
        assert!(matches!(err, UsageError::MissingValue("--lang")));
    }

    #[test]
    fn test_ocr_args_rejects_second_positional() {
        let err = parse_ocr_args(strings(&["a.png", "b.png"])).unwrap_err();
        assert!(matches!(err, UsageError::Unexpected(ref s) if s == "b.png"));
    }

    #[test]
    fn test_ocr_args_rejects_unknown_flag() {
        let err = parse_ocr_args(strings(&["--gpu", "a.png"])).unwrap_err();
        assert!(matches!(err, UsageError::Unexpected(ref s) if s == "--gpu"));
    }

    #[test]
    fn test_ocr_args_help_wins() {
        let parsed = parse_ocr_args(strings(&["--help"])).unwrap();
        assert_eq!(parsed, Command::Help);
    }

    #[test]
    fn test_validate_languages() {
        assert!(validate_languages("eng").is_ok());
        assert!(validate_languages("eng+chi_tra").is_ok());
        assert!(validate_languages("").is_err());
        assert!(validate_languages("eng+").is_err());
        assert!(validate_languages("ENG").is_err());
        assert!(validate_languages("eng deu").is_err());
    }

    #[test]
    fn test_selection_args() {
        let parsed = parse_selection_args(strings(&["--clipboard", "--wait"])).unwrap();
        assert_eq!(
            parsed,
            Command::Run(SelectionArgs {
                clipboard: true,
                wait: true,
            })
        );
    }

    #[test]
    fn test_selection_args_empty() {
        let parsed = parse_selection_args(strings(&[])).unwrap();
        assert_eq!(parsed, Command::Run(SelectionArgs::default()));
    }

    #[test]
    fn test_selection_args_rejects_positional() {
        let err = parse_selection_args(strings(&["now"])).unwrap_err();
        assert!(matches!(err, UsageError::Unexpected(ref s) if s == "now"));
    }
}
