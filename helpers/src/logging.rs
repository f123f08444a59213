use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for a script run. Progress goes through
/// `tracing`; the final outcome of a script is printed to stdout.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
