//! Print the operating system's current text selection to stdout.
//!
//! Exit codes: 0 text captured, 1 nothing selected or capture failed,
//! 2 usage error.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use text_capture::capture;
use text_capture::cli::{self, Command};
use text_capture::logging;

const USAGE: &str = "Usage: get-selected-text [--clipboard] [--wait]";

const HELP: &str = "\
Print the current text selection.

On macOS and Windows this simulates the platform copy keystroke and reads
the result from the clipboard, restoring the original clipboard contents
afterwards. On Linux it reads the PRIMARY selection directly.

Usage: get-selected-text [OPTIONS]

Options:
  --clipboard  Read the clipboard buffer instead of the selection
  --wait       Wait for Enter before capturing, to leave time to select
  -h, --help   Show this help";

fn main() -> ExitCode {
    logging::init();

    let args = match cli::parse_selection_args(std::env::args().skip(1)) {
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

    if args.wait {
        eprint!("Select some text in any application, then press Enter... ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }

    let text = if args.clipboard {
        capture::clipboard_text()
    } else {
        capture::selected_text()
    };

    match text {
        Some(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No text was selected or could not be retrieved.");
            ExitCode::FAILURE
        }
    }
}
