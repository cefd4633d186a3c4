use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber for host programs and tests.
///
/// The filter is taken from `RUST_LOG`, defaulting to `info`. Calling this
/// more than once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
