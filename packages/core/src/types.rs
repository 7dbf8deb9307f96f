// ABOUTME: Domain type definitions shared by every StratOS package
// ABOUTME: Users, roles, projects, tasks and their create/update inputs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserId = u32;
pub type ProjectId = u32;
pub type TaskId = u32;

/// Role of a user within the consulting team
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    #[serde(rename = "Team Member")]
    TeamMember,
}

impl Default for Role {
    fn default() -> Self {
        Role::TeamMember
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Manager => write!(f, "Manager"),
            Role::TeamMember => write!(f, "Team Member"),
        }
    }
}

/// How a user wants free-form text to be analyzed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPreferences {
    pub focus_areas: Vec<String>,
    pub sentiment_focus: String,
}

impl AnalysisPreferences {
    /// Preferences assigned to a freshly signed-up user
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Manager => Self {
                focus_areas: vec![
                    "strategy".to_string(),
                    "ROI".to_string(),
                    "client relations".to_string(),
                ],
                sentiment_focus: "business impact".to_string(),
            },
            Role::TeamMember => Self {
                focus_areas: vec![
                    "technical debt".to_string(),
                    "UX".to_string(),
                    "performance".to_string(),
                ],
                sentiment_focus: "technical feasibility".to_string(),
            },
        }
    }
}

/// A user account. Credentials are never part of this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub analysis_preferences: AnalysisPreferences,
}

impl User {
    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager)
    }
}

/// Status options for projects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::ToDo
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::ToDo => write!(f, "To Do"),
            ProjectStatus::InProgress => write!(f, "In Progress"),
            ProjectStatus::Done => write!(f, "Done"),
        }
    }
}

/// Task status options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
    Blocked,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::ToDo
    }
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::ToDo => write!(f, "To Do"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Done => write!(f, "Done"),
            TaskStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

/// A client engagement owned by a manager
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub due_date: NaiveDate,
    pub team_members: Vec<UserId>,
    pub manager_id: UserId,
}

impl Project {
    pub fn has_member(&self, user_id: UserId) -> bool {
        self.team_members.contains(&user_id)
    }
}

/// A unit of work inside a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub assigned_to: UserId,
}

impl Task {
    /// Open tasks past their due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.status.is_done()
    }
}

/// The signed-in user, persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub signed_in_at: DateTime<Utc>,
}

/// Input for signing up a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Input for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateInput {
    pub name: String,
    pub description: String,
    pub status: Option<ProjectStatus>,
    pub due_date: NaiveDate,
    pub team_members: Vec<UserId>,
}

/// Input for updating an existing project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub due_date: Option<NaiveDate>,
    pub team_members: Option<Vec<UserId>>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateInput {
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: Option<TaskStatus>,
    pub due_date: NaiveDate,
    pub assigned_to: UserId,
}
