//! Test utilities for building throwaway workspaces

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use stratos_ai::InsightService;
use stratos_core::{ProjectCreateInput, ProjectId, Role, SignupInput, TaskCreateInput, UserId};
use stratos_security::{CredentialStorage, PasswordHashing};
use stratos_storage::{CollectionStore, MemoryStore};

use crate::manager::Workspace;

pub const TEST_PASSWORD: &str = "secret-pass";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Workspace over `store` with cheap password hashing and no analysis delay
pub async fn fast_workspace(store: Arc<dyn CollectionStore>) -> Workspace {
    let authenticator = Arc::new(CredentialStorage::with_hashing(
        store.clone(),
        PasswordHashing::insecure_fast(),
    ));
    let insights = InsightService::new().with_delay(Duration::ZERO);
    Workspace::open_with(store, authenticator, insights)
        .await
        .expect("open test workspace")
}

/// In-memory workspace holding one team member and one manager, with the
/// manager signed in. Returns `(store, workspace, manager_id, member_id)`.
pub async fn memory_workspace() -> (Arc<dyn CollectionStore>, Workspace, UserId, UserId) {
    let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
    let mut ws = fast_workspace(store.clone()).await;

    let member = ws
        .sign_up(signup("Mike Chen", "mike@company.com", Role::TeamMember))
        .await
        .expect("sign up member");
    let manager = ws
        .sign_up(signup("Sarah Johnson", "sarah@company.com", Role::Manager))
        .await
        .expect("sign up manager");

    (store, ws, manager.id, member.id)
}

pub fn signup(name: &str, email: &str, role: Role) -> SignupInput {
    SignupInput {
        name: name.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        role,
    }
}

pub fn project_input(name: &str, team_members: Vec<UserId>) -> ProjectCreateInput {
    ProjectCreateInput {
        name: name.to_string(),
        description: format!("{} description", name),
        status: None,
        due_date: date(2025, 7, 15),
        team_members,
    }
}

pub fn task_input(project_id: ProjectId, name: &str, assigned_to: UserId) -> TaskCreateInput {
    TaskCreateInput {
        project_id,
        name: name.to_string(),
        description: String::new(),
        status: None,
        due_date: date(2025, 7, 10),
        assigned_to,
    }
}
