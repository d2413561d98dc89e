use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "salescope=info,tower_http=info";

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default filter. Logs go to stderr so query output on stdout stays clean.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
