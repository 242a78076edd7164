//! Logging setup for embedding hosts.
//!
//! The engine itself only emits `tracing` events; hosts that have no
//! subscriber of their own can install this one.

use tracing_subscriber::EnvFilter;

/// Install a formatted `tracing` subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls are no-ops if a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
