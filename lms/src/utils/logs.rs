use tracing_subscriber::EnvFilter;

// installs a JSON subscriber, the level comes from RUST_LOG and defaults to info
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // stdout carries command responses, logs go to stderr.
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}
