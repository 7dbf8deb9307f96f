// ABOUTME: Dashboard statistics over a viewer's visible projects and tasks
// ABOUTME: Task counts by state plus a team workload summary for managers

use chrono::NaiveDate;
use serde::Serialize;
use stratos_core::{Project, Role, Task, TaskStatus, User, UserId, WORKLOAD_CAPACITY};

use crate::manager::{Workspace, WorkspaceResult};
use crate::visibility::{visible_projects, visible_tasks};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWorkload {
    pub user_id: UserId,
    pub name: String,
    pub open_tasks: usize,
    /// Share of `WORKLOAD_CAPACITY` in use, capped at 100
    pub load_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub completed_tasks: usize,
    pub active_tasks: usize,
    pub in_progress_tasks: usize,
    pub overdue_tasks: usize,
    /// Empty unless the viewer is a manager
    pub team_workload: Vec<MemberWorkload>,
}

pub fn dashboard_stats(
    viewer: &User,
    users: &[User],
    projects: &[Project],
    tasks: &[Task],
    today: NaiveDate,
) -> DashboardStats {
    let visible_projects = visible_projects(Some(viewer), projects);
    let visible_tasks = visible_tasks(Some(viewer), projects, tasks);

    let count = |pred: &dyn Fn(&Task) -> bool| {
        visible_tasks.iter().filter(|&&t| pred(t)).count()
    };

    let team_workload = match viewer.role {
        Role::Manager => users
            .iter()
            .filter(|u| u.role == Role::TeamMember)
            .map(|member| {
                let open_tasks =
                    count(&|t: &Task| t.assigned_to == member.id && !t.status.is_done());
                MemberWorkload {
                    user_id: member.id,
                    name: member.name.clone(),
                    open_tasks,
                    load_percent: load_percent(open_tasks),
                }
            })
            .collect(),
        Role::TeamMember => Vec::new(),
    };

    DashboardStats {
        total_projects: visible_projects.len(),
        completed_tasks: count(&|t: &Task| t.status.is_done()),
        active_tasks: count(&|t: &Task| !t.status.is_done()),
        in_progress_tasks: count(&|t: &Task| t.status == TaskStatus::InProgress),
        overdue_tasks: count(&|t: &Task| t.is_overdue(today)),
        team_workload,
    }
}

fn load_percent(open_tasks: usize) -> u8 {
    (open_tasks.min(WORKLOAD_CAPACITY) * 100 / WORKLOAD_CAPACITY) as u8
}

impl Workspace {
    /// Statistics for the signed-in user as of `today`
    pub fn dashboard(&self, today: NaiveDate) -> WorkspaceResult<DashboardStats> {
        let viewer = self.require_current_user()?;
        Ok(dashboard_stats(
            viewer,
            &self.users,
            &self.projects,
            &self.tasks,
            today,
        ))
    }
}
