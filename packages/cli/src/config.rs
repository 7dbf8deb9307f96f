// ABOUTME: Runtime configuration for the stratos binary
// ABOUTME: Reads data directory, analysis latency and log filter from the environment

use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use stratos_config::constants::{
    RUST_LOG, STRATOS_ANALYSIS_DELAY_MS, STRATOS_DATA_DIR, STRATOS_LOG,
};
use stratos_config::env::{env_value, env_with_fallback};
use stratos_core::{stratos_dir, DEFAULT_ANALYSIS_DELAY_MS};
use thiserror::Error;

/// Filter used when neither STRATOS_LOG nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid analysis delay '{value}': {source}")]
    InvalidAnalysisDelay {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub analysis_delay: Duration,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env_value(STRATOS_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(stratos_dir);

        let analysis_delay = match env_value(STRATOS_ANALYSIS_DELAY_MS) {
            Some(value) => {
                let millis = value
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidAnalysisDelay { value, source })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
        };

        let log_filter = env_with_fallback(STRATOS_LOG, RUST_LOG)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            data_dir,
            analysis_delay,
            log_filter,
        })
    }
}
