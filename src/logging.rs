//! Logging initialization for the tidywatch CLI.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbose mode raises the filter to debug level for tidywatch targets.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tidywatch=debug")
    } else {
        EnvFilter::new("tidywatch=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
