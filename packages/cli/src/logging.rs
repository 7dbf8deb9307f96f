// ABOUTME: Tracing subscriber setup for the stratos binary
// ABOUTME: Compact stderr output so tables on stdout stay clean

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global subscriber. An unparsable filter falls back to the default.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths in logs
        .compact() // Use compact format for cleaner output
        .try_init();
}
