//! Logging init: diagnostics go to stderr so they never clobber the progress line.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
