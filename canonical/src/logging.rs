//! Development-time tracing for the `canonical` binary.
//!
//! Validators never log; only document loading and command orchestration emit events.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr so it never mixes with
/// check results on stdout.
///
/// # Example
/// ```bash
/// RUST_LOG=canonical=debug canonical check actions.ndjson
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
