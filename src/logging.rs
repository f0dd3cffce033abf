//! Logging setup for the acctfp binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact stderr subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr so
/// stdout stays machine-readable.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
