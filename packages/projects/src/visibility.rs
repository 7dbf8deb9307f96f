// ABOUTME: Role-based visibility of projects and tasks
// ABOUTME: Managers see what they manage, team members see their projects and assignments

use std::collections::HashSet;

use stratos_core::{Project, ProjectId, Role, Task, User};

use crate::manager::Workspace;

/// Projects `user` may see. Nobody signed in sees nothing.
pub fn visible_projects<'a>(user: Option<&User>, projects: &'a [Project]) -> Vec<&'a Project> {
    let Some(user) = user else {
        return Vec::new();
    };

    projects
        .iter()
        .filter(|p| match user.role {
            Role::Manager => p.manager_id == user.id,
            Role::TeamMember => p.has_member(user.id),
        })
        .collect()
}

/// Tasks `user` may see: every task of a visible project, plus for team
/// members anything assigned to them elsewhere
pub fn visible_tasks<'a>(
    user: Option<&User>,
    projects: &[Project],
    tasks: &'a [Task],
) -> Vec<&'a Task> {
    let Some(user) = user else {
        return Vec::new();
    };

    let visible: HashSet<ProjectId> = visible_projects(Some(user), projects)
        .into_iter()
        .map(|p| p.id)
        .collect();

    tasks
        .iter()
        .filter(|t| {
            visible.contains(&t.project_id)
                || (user.role == Role::TeamMember && t.assigned_to == user.id)
        })
        .collect()
}

impl Workspace {
    pub fn visible_projects(&self) -> Vec<&Project> {
        visible_projects(self.current_user(), &self.projects)
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible_tasks(self.current_user(), &self.projects, &self.tasks)
    }
}
