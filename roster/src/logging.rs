//! Tracing setup shared by the roster binaries.
//!
//! Diagnostics go to stderr and are filtered through `RUST_LOG`. Registry
//! mutations are logged at `info` with `activity` and `email` fields; rejected
//! operations at `debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Falls back to `default_directives` if unset or invalid.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=roster=debug cargo run -p roster-server
/// ```
pub fn init(default_directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
