// ABOUTME: Mock AI insights for StratOS
// ABOUTME: Rule-based text analysis with simulated latency and a per-user history log

use stratos_storage::StorageError;
use thiserror::Error;

pub mod history;
pub mod rules;
pub mod service;
pub mod types;

// Re-export service types
pub use rules::{InsightRules, Predicate, RoleTemplate, Rule, RuleSet, ScannedText};
pub use service::InsightService;
pub use types::{AnalysisResult, Sentiment};

// Re-export history types
pub use history::{AnalysisHistory, AnalysisRecord};

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Analysis history storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type InsightResult<T> = Result<T, InsightError>;
