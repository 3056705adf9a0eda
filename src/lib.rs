//! Library behind the `extract-text-from-image` and `get-selected-text`
//! command-line tools.
//!
//! The binaries are thin: they parse arguments, call into here, and map the
//! outcome to exit codes (0 success, 1 failure or no text, 2 usage error).

pub mod capture;
pub mod cli;
pub mod logging;
pub mod system;
