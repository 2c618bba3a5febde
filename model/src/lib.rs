//! Data model for the tensorcraft GraphQL API.

use tracing_subscriber::EnvFilter;

pub mod node;
pub mod relay;
pub mod schema;

/// Install a global `tracing` subscriber which logs to stderr.
///
/// Verbosity is controlled by `RUST_LOG`. Calling this more than once is harmless; only the first
/// call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
