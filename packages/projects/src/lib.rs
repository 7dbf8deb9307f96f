//! # StratOS Projects
//!
//! The StratOS workspace: accounts, role-scoped projects and tasks, dashboard
//! statistics and mock AI insights, all persisted through a
//! [`CollectionStore`].

pub mod dashboard;
pub mod insights;
pub mod manager;
pub mod seed;
pub mod tasks;
pub mod users;
pub mod visibility;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types from core
pub use stratos_core::{
    AnalysisPreferences, Project, ProjectCreateInput, ProjectId, ProjectStatus,
    ProjectUpdateInput, Role, Session, SignupInput, Task, TaskCreateInput, TaskId, TaskStatus,
    User, UserId, ValidationError,
};

// Re-export the workspace
pub use manager::{Workspace, WorkspaceError, WorkspaceResult};

pub use dashboard::{dashboard_stats, DashboardStats, MemberWorkload};
pub use seed::{demo_projects, demo_tasks, demo_users};
pub use visibility::{visible_projects, visible_tasks};

// Re-export storage types
pub use stratos_storage::{
    CollectionKey, CollectionStore, JsonFileStore, MemoryStore, StorageError, StorageResult,
};

// Re-export insight types
pub use stratos_ai::{AnalysisRecord, AnalysisResult, InsightService, Sentiment};

// Re-export credential types
pub use stratos_security::{Authenticator, CredentialStorage, PasswordHashing};
