// ABOUTME: Task operations for the workspace
// ABOUTME: Creates tasks against existing projects and assignees and edits them in place

use chrono::{Duration, NaiveDate};
use stratos_core::{
    next_id, validate_task_data, ProjectId, Task, TaskCreateInput, TaskId, TaskStatus, UserId,
    ACTION_ITEM_DUE_DAYS,
};
use tracing::{debug, info};

use crate::manager::{Workspace, WorkspaceError, WorkspaceResult};

impl Workspace {
    /// Creates a task. Any signed-up user may create one, but the project and
    /// the assignee must both exist.
    pub async fn create_task(
        &mut self,
        actor: UserId,
        input: TaskCreateInput,
    ) -> WorkspaceResult<Task> {
        self.require_user(actor)?;

        let errors = validate_task_data(&input);
        if !errors.is_empty() {
            return Err(WorkspaceError::Validation(errors));
        }
        if self.project(input.project_id).is_none() {
            return Err(WorkspaceError::ProjectNotFound(input.project_id));
        }
        self.require_user(input.assigned_to)?;

        let task = Task {
            id: next_id(self.tasks.iter().map(|t| t.id)),
            project_id: input.project_id,
            name: input.name.trim().to_string(),
            description: input.description,
            status: input.status.unwrap_or_default(),
            due_date: input.due_date,
            assigned_to: input.assigned_to,
        };

        let mut tasks = self.tasks.clone();
        tasks.push(task.clone());
        self.commit_tasks(tasks).await?;

        info!(
            "User {} created task {} in project {}",
            actor, task.id, task.project_id
        );
        Ok(task)
    }

    pub async fn update_task_status(
        &mut self,
        id: TaskId,
        status: TaskStatus,
    ) -> WorkspaceResult<Task> {
        self.edit_task(id, |task| task.status = status).await
    }

    pub async fn reassign_task(&mut self, id: TaskId, user_id: UserId) -> WorkspaceResult<Task> {
        self.require_user(user_id)?;
        self.edit_task(id, |task| task.assigned_to = user_id).await
    }

    /// Turns an analysis action item into a To Do task for `actor`, due a
    /// week after `today`
    pub async fn convert_action_item(
        &mut self,
        actor: UserId,
        action_item: &str,
        project_id: ProjectId,
        today: NaiveDate,
    ) -> WorkspaceResult<Task> {
        let input = TaskCreateInput {
            project_id,
            name: action_item.to_string(),
            description: format!("Generated from AI analysis ({})", today.format("%Y-%m-%d")),
            status: Some(TaskStatus::ToDo),
            due_date: today + Duration::days(ACTION_ITEM_DUE_DAYS),
            assigned_to: actor,
        };
        debug!("Converting action item into project {}", project_id);
        self.create_task(actor, input).await
    }

    async fn edit_task<F>(&mut self, id: TaskId, apply: F) -> WorkspaceResult<Task>
    where
        F: FnOnce(&mut Task),
    {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(WorkspaceError::TaskNotFound(id))?;

        let mut tasks = self.tasks.clone();
        apply(&mut tasks[index]);
        let updated = tasks[index].clone();
        self.commit_tasks(tasks).await?;

        debug!("Updated task {}", id);
        Ok(updated)
    }
}
