// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across StratOS

// Storage Configuration
pub const STRATOS_DATA_DIR: &str = "STRATOS_DATA_DIR";

// Insights Configuration
pub const STRATOS_ANALYSIS_DELAY_MS: &str = "STRATOS_ANALYSIS_DELAY_MS";

// Logging Configuration
pub const STRATOS_LOG: &str = "STRATOS_LOG";
pub const RUST_LOG: &str = "RUST_LOG"; // Fallback
