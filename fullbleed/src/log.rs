use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Records from the `log` crate are forwarded as well. Calling this again
/// after a subscriber is installed does nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
