// ABOUTME: Library half of the stratos CLI
// ABOUTME: Configuration, logging setup and table rendering shared with the binary

pub mod config;
pub mod display;
pub mod logging;


pub use config::{Config, ConfigError, DEFAULT_LOG_FILTER};
pub use logging::init_tracing;
