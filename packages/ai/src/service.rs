// ABOUTME: Insight service producing mock AI analyses of free-form text
// ABOUTME: Waits a fixed simulated latency, then evaluates the rule tables

use std::time::Duration;

use stratos_core::{User, DEFAULT_ANALYSIS_DELAY_MS};
use tracing::{debug, info};

use crate::rules::InsightRules;
use crate::types::AnalysisResult;

/// Deterministic stand-in for a model-backed text analysis
#[derive(Debug, Clone)]
pub struct InsightService {
    rules: InsightRules,
    delay: Duration,
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightService {
    /// Standard rules with the default simulated latency
    pub fn new() -> Self {
        Self {
            rules: InsightRules::default(),
            delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_rules(mut self, rules: InsightRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &InsightRules {
        &self.rules
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Analyze `text` from `user`'s perspective after the simulated latency
    pub async fn analyze(&self, text: &str, user: &User) -> AnalysisResult {
        info!(
            "Analyzing {} characters for user {} ({})",
            text.chars().count(),
            user.id,
            user.role
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = self.rules.evaluate(text, user);
        debug!(
            "Analysis complete: sentiment={}, keywords={}, action_items={}",
            result.sentiment,
            result.keywords.len(),
            result.action_items.len()
        );
        result
    }
}
