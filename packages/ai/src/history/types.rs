// ABOUTME: Analysis history type definitions
// ABOUTME: One record per analysis request, attributed to the requesting user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stratos_core::UserId;

use crate::types::AnalysisResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub user_id: UserId,
    pub timestamp: DateTime<Utc>,
    pub input: String,
    pub output: AnalysisResult,
}

impl AnalysisRecord {
    pub fn new(user_id: UserId, input: impl Into<String>, output: AnalysisResult) -> Self {
        Self {
            user_id,
            timestamp: Utc::now(),
            input: input.into(),
            output,
        }
    }
}
