// ABOUTME: Demo dataset for a fresh workspace
// ABOUTME: One manager, three team members, two projects and three tasks

use chrono::NaiveDate;
use stratos_core::{
    AnalysisPreferences, Project, ProjectStatus, Role, Task, TaskStatus, User, UserId,
};
use tracing::{info, warn};

use crate::manager::{Workspace, WorkspaceResult};

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn demo_user(
    id: UserId,
    name: &str,
    email: &str,
    role: Role,
    focus_areas: &[&str],
    sentiment_focus: &str,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        analysis_preferences: AnalysisPreferences {
            focus_areas: focus_areas.iter().map(|s| s.to_string()).collect(),
            sentiment_focus: sentiment_focus.to_string(),
        },
    }
}

pub fn demo_users() -> Vec<User> {
    vec![
        demo_user(
            1,
            "Sarah Johnson",
            "sarah@company.com",
            Role::Manager,
            &["strategy", "ROI", "client relations"],
            "business impact",
        ),
        demo_user(
            2,
            "Mike Chen",
            "mike@company.com",
            Role::TeamMember,
            &["technical debt", "UX", "performance"],
            "technical feasibility",
        ),
        demo_user(
            3,
            "Alex Rivera",
            "alex@company.com",
            Role::TeamMember,
            &["integration", "scalability", "security"],
            "implementation risks",
        ),
        demo_user(
            4,
            "Emma Davis",
            "emma@company.com",
            Role::TeamMember,
            &["data quality", "reporting", "analytics"],
            "data insights",
        ),
    ]
}

pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Digital Transformation Strategy".to_string(),
            description: "Comprehensive digital transformation roadmap for Fortune 500 client"
                .to_string(),
            status: ProjectStatus::InProgress,
            due_date: demo_date(2025, 7, 15),
            team_members: vec![2, 3],
            manager_id: 1,
        },
        Project {
            id: 2,
            name: "Market Research Analysis".to_string(),
            description: "Competitive analysis and market positioning study".to_string(),
            status: ProjectStatus::ToDo,
            due_date: demo_date(2025, 7, 30),
            team_members: vec![3, 4],
            manager_id: 1,
        },
    ]
}

pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            project_id: 1,
            name: "Conduct stakeholder interviews".to_string(),
            description: "Interview key stakeholders to understand current pain points"
                .to_string(),
            status: TaskStatus::Done,
            due_date: demo_date(2025, 7, 5),
            assigned_to: 2,
        },
        Task {
            id: 2,
            project_id: 1,
            name: "Technology audit".to_string(),
            description: "Assess current technology stack and identify gaps".to_string(),
            status: TaskStatus::InProgress,
            due_date: demo_date(2025, 7, 10),
            assigned_to: 3,
        },
        Task {
            id: 3,
            project_id: 2,
            name: "Competitor analysis".to_string(),
            description: "Research top 5 competitors and their market strategies".to_string(),
            status: TaskStatus::ToDo,
            due_date: demo_date(2025, 7, 25),
            assigned_to: 4,
        },
    ]
}

impl Workspace {
    /// Populates an empty workspace with the demo dataset, every demo account
    /// sharing `demo_password`. Returns false and changes nothing when any
    /// users, projects or tasks already exist.
    pub async fn seed_demo(&mut self, demo_password: &str) -> WorkspaceResult<bool> {
        if !self.users.is_empty() || !self.projects.is_empty() || !self.tasks.is_empty() {
            warn!("Workspace already has data, skipping demo seed");
            return Ok(false);
        }

        let users = demo_users();
        for user in &users {
            self.authenticator.enroll(user.id, demo_password).await?;
        }

        self.commit_users(users).await?;
        self.commit_projects(demo_projects()).await?;
        self.commit_tasks(demo_tasks()).await?;

        info!("Seeded demo workspace");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fast_workspace, memory_workspace};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use stratos_storage::{CollectionStore, MemoryStore};

    #[tokio::test]
    async fn test_seed_populates_empty_workspace() {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
        let mut ws = fast_workspace(store).await;

        assert!(ws.seed_demo("demo-pass").await.unwrap());

        assert_eq!(ws.users().len(), 4);
        assert_eq!(ws.projects().len(), 2);
        assert_eq!(ws.tasks().len(), 3);
        assert_eq!(ws.team_members().len(), 3);
        assert!(ws.current_user().is_none());

        let sarah = ws.log_in("sarah@company.com", "demo-pass").await.unwrap();
        assert_eq!(sarah.role, Role::Manager);
        let visible: Vec<u32> = ws.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_seed_leaves_populated_workspace_alone() {
        let (_store, mut ws, _manager, _member) = memory_workspace().await;
        let before = ws.users().to_vec();

        assert!(!ws.seed_demo("demo-pass").await.unwrap());

        assert_eq!(ws.users(), before.as_slice());
        assert!(ws.projects().is_empty());
    }

    #[test]
    fn test_demo_tasks_reference_demo_projects_and_users() {
        let users = demo_users();
        let projects = demo_projects();

        for task in demo_tasks() {
            assert!(projects.iter().any(|p| p.id == task.project_id));
            assert!(users.iter().any(|u| u.id == task.assigned_to));
        }
    }
}
