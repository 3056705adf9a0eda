//! Tracing subscriber setup for the command-line tools.

use tracing_subscriber::EnvFilter;

/// Initializes logging for a CLI run.
///
/// Diagnostics go to stderr; stdout is reserved for tool output. The default
/// filter is `warn` so a successful run prints nothing but the result;
/// `RUST_LOG` overrides it (e.g. `RUST_LOG=debug` to watch clipboard polling).
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
