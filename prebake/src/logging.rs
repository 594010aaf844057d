use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with JSON formatting and environment-based filtering.
///
/// Host binaries call this once at startup. The filter comes from the
/// standard `RUST_LOG` environment variable and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}
