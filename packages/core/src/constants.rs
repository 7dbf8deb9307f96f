use std::env;
use std::path::PathBuf;

/// Number of characters of the analyzed text quoted in a summary
pub const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Maximum number of keywords reported by an analysis
pub const MAX_KEYWORDS: usize = 5;

/// Simulated latency of an analysis request
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// Open tasks at which a team member counts as fully loaded
pub const WORKLOAD_CAPACITY: usize = 5;

/// Days between converting an action item and its task's due date
pub const ACTION_ITEM_DUE_DAYS: i64 = 7;

/// Get the path to the StratOS directory (~/.stratos)
pub fn stratos_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".stratos")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".stratos")
    }
}
