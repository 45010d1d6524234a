//! Diagnostic output for the `riasec` binary.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr formatter filtered by `RUST_LOG`.
///
/// Library crates log through the `log` facade; the subscriber's
/// `tracing-log` bridge forwards those records. Stdout stays reserved for
/// command output. Later calls keep the first subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("logging already initialised; keeping the existing subscriber");
    }
}
