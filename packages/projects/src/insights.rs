// ABOUTME: Workspace glue for mock AI insights
// ABOUTME: Analyzes text as the signed-in user and records the result in the history log

use stratos_ai::{AnalysisRecord, AnalysisResult, InsightService};
use tracing::info;

use crate::manager::{Workspace, WorkspaceResult};

impl Workspace {
    /// Analyzes `text` for the signed-in user. The result is appended to the
    /// history log before it is returned.
    pub async fn analyze(&mut self, text: &str) -> WorkspaceResult<AnalysisResult> {
        let user = self.require_current_user()?.clone();

        let result = self.insights.analyze(text, &user).await;
        self.history
            .append(AnalysisRecord::new(user.id, text, result.clone()))
            .await?;

        info!(
            "Recorded {} analysis for user {}",
            result.sentiment, user.id
        );
        Ok(result)
    }

    /// The signed-in user's analyses, newest first
    pub fn history(&self) -> Vec<&AnalysisRecord> {
        match self.current_user() {
            Some(user) => self.history.for_user(user.id),
            None => Vec::new(),
        }
    }

    pub fn insights(&self) -> &InsightService {
        &self.insights
    }
}
