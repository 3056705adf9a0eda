//! Extract text from an image file and print it to stdout.
//!
//! Exit codes: 0 text found, 1 failure or no text (no message in the no-text
//! case, which is an expected outcome), 2 usage error.

use std::process::ExitCode;

use text_capture::cli::{self, Command};
use text_capture::logging;
use text_capture::system::ocr::{self, OcrError};

const USAGE: &str = "Usage: extract-text-from-image [--lang <codes>] [--json] <image_path>";

const HELP: &str = "\
Extract text from an image file using Tesseract OCR.

Usage: extract-text-from-image [OPTIONS] <image_path>

Options:
  --lang <codes>  Tesseract language codes joined with '+'
                  (default: eng+chi_tra)
  --json          Emit JSON with per-word bounding boxes and confidence
  -h, --help      Show this help

The recognized text is printed to stdout. If no text is found the tool
exits with code 1 and prints nothing.";

fn main() -> ExitCode {
    logging::init();

    let args = match cli::parse_ocr_args(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if !args.image_path.exists() {
        eprintln!(
            "Error: image file does not exist: {}",
            args.image_path.display()
        );
        return ExitCode::FAILURE;
    }

    match ocr::extract_text(&args.image_path, &args.languages) {
        Ok(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(doc) => println!("{doc}"),
                    Err(e) => {
                        eprintln!("Error: failed to serialize OCR result: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", result.full_text);
            }
            ExitCode::SUCCESS
        }
        // Expected outcome, not an error: exit 1 with nothing on stderr.
        Err(OcrError::NoTextDetected) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
