// ABOUTME: Core types, constants and utilities for StratOS
// ABOUTME: Foundational package providing shared functionality across all StratOS packages

pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    AnalysisPreferences, Project, ProjectCreateInput, ProjectId, ProjectStatus,
    ProjectUpdateInput, Role, Session, SignupInput, Task, TaskCreateInput, TaskId, TaskStatus,
    User, UserId,
};

// Re-export constants
pub use constants::{
    stratos_dir, ACTION_ITEM_DUE_DAYS, DEFAULT_ANALYSIS_DELAY_MS, MAX_KEYWORDS,
    SUMMARY_PREVIEW_CHARS, WORKLOAD_CAPACITY,
};

// Re-export utilities
pub use utils::{next_id, preview, truncate};

// Re-export validation
pub use validation::{
    validate_project_data, validate_project_update, validate_signup, validate_task_data,
    ValidationError,
};
