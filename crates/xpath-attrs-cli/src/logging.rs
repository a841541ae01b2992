//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Install the stderr subscriber; `RUST_LOG` overrides the verbosity flags
///
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
