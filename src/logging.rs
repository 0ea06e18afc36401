//! Logging setup for the command line tool.
//!
//! Diagnostics go to stderr so they never mix with the version lines on
//! stdout. `RUST_LOG` overrides the level chosen here.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .without_time()
        .with_target(false)
        .try_init();
}
