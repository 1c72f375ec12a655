//! Tracing setup for the `dosecalc` binary.
//!
//! stdout carries rendered cards, JSON reports and CSV charts, so every
//! log line goes to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the subscriber at WARN
///
/// Info events (config loaded, chart built) stay hidden unless asked for
/// with `RUST_LOG=info`.
pub fn init() {
    init_with_level("warn")
}

/// Install the subscriber with `default_level` as the fallback filter
///
/// `RUST_LOG`, when set and parseable, takes precedence.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route calculation traces into the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
