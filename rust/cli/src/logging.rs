//! Diagnostic logging setup.
//!
//! Log output goes to stderr so it never interleaves with the session text on
//! stdout. The filter defaults to warnings only and can be raised with
//! `RUST_LOG`, e.g. `RUST_LOG=baccarat_engine=debug` to trace every round.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
