// ABOUTME: Environment variable lookup helpers
// ABOUTME: Treats blank values as unset and supports legacy fallback names

use std::env;
use tracing::debug;

/// Value of `name`, or `None` when it is unset, not unicode, or blank
pub fn env_value(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Value of `primary`, falling back to `fallback` when `primary` is unset
pub fn env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    env_value(primary).or_else(|| {
        let value = env_value(fallback);
        if value.is_some() {
            debug!("{} not set, using {}", primary, fallback);
        }
        value
    })
}
