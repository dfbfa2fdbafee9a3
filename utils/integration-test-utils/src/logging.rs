use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber. Safe to call from every test;
/// only the first call installs anything.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
