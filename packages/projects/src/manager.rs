// ABOUTME: Workspace repository owning users, projects, tasks and the session
// ABOUTME: Every mutation rewrites the affected collection and only then updates memory

use std::sync::Arc;

use stratos_ai::{AnalysisHistory, InsightError, InsightService};
use stratos_core::{
    next_id, validate_project_data, validate_project_update, Project, ProjectCreateInput,
    ProjectId, ProjectUpdateInput, Session, Task, TaskId, User, UserId, ValidationError,
};
use stratos_security::{Authenticator, CredentialStorage, SecurityError};
use stratos_storage::{
    load_collection, save_collection, CollectionKey, CollectionStore, StorageError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Workspace errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Credential error: {0}")]
    Security(#[from] SecurityError),
    #[error("Insight error: {0}")]
    Insight(#[from] InsightError),
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),
    #[error("No user is signed in")]
    NotSignedIn,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

pub struct Workspace {
    pub(crate) store: Arc<dyn CollectionStore>,
    pub(crate) authenticator: Arc<dyn Authenticator>,
    pub(crate) insights: InsightService,
    pub(crate) history: AnalysisHistory,
    pub(crate) users: Vec<User>,
    pub(crate) projects: Vec<Project>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) session: Option<Session>,
}

impl Workspace {
    /// Open a workspace with Argon2id credentials in the same store and the
    /// standard insight rules
    pub async fn open(store: Arc<dyn CollectionStore>) -> WorkspaceResult<Self> {
        let authenticator = Arc::new(CredentialStorage::new(store.clone()));
        Self::open_with(store, authenticator, InsightService::new()).await
    }

    pub async fn open_with(
        store: Arc<dyn CollectionStore>,
        authenticator: Arc<dyn Authenticator>,
        insights: InsightService,
    ) -> WorkspaceResult<Self> {
        let users: Vec<User> = load_collection(store.as_ref(), CollectionKey::Users)
            .await?
            .unwrap_or_default();
        let projects: Vec<Project> = load_collection(store.as_ref(), CollectionKey::Projects)
            .await?
            .unwrap_or_default();
        let tasks: Vec<Task> = load_collection(store.as_ref(), CollectionKey::Tasks)
            .await?
            .unwrap_or_default();
        let history = AnalysisHistory::load(store.clone()).await?;

        let mut session: Option<Session> =
            load_collection(store.as_ref(), CollectionKey::CurrentUser).await?;
        if let Some(stale) = session
            .as_ref()
            .map(|s| s.user_id)
            .filter(|id| !users.iter().any(|u| u.id == *id))
        {
            warn!("Dropping session for unknown user {}, signing out", stale);
            store.remove(CollectionKey::CurrentUser).await?;
            session = None;
        }

        debug!(
            "Opened workspace with {} users, {} projects, {} tasks",
            users.len(),
            projects.len(),
            tasks.len()
        );

        Ok(Self {
            store,
            authenticator,
            insights,
            history,
            users,
            projects,
            tasks,
            session,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks belonging to `project_id`
    pub fn tasks_for_project(&self, project_id: ProjectId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Creates a new project owned by `actor`, who must be a Manager
    pub async fn create_project(
        &mut self,
        actor: UserId,
        input: ProjectCreateInput,
    ) -> WorkspaceResult<Project> {
        let manager = self.require_user(actor)?;
        if !manager.is_manager() {
            return Err(WorkspaceError::Forbidden(
                "Only managers can create projects".to_string(),
            ));
        }

        let mut errors = validate_project_data(&input);
        errors.extend(self.unknown_members(&input.team_members));
        if !errors.is_empty() {
            return Err(WorkspaceError::Validation(errors));
        }

        let project = Project {
            id: next_id(self.projects.iter().map(|p| p.id)),
            name: input.name.trim().to_string(),
            description: input.description,
            status: input.status.unwrap_or_default(),
            due_date: input.due_date,
            team_members: input.team_members,
            manager_id: actor,
        };

        let mut projects = self.projects.clone();
        projects.push(project.clone());
        self.commit_projects(projects).await?;

        info!("Created project '{}' with id {}", project.name, project.id);
        Ok(project)
    }

    /// Updates an existing project; only its owning manager may do so
    pub async fn update_project(
        &mut self,
        actor: UserId,
        id: ProjectId,
        input: ProjectUpdateInput,
    ) -> WorkspaceResult<Project> {
        let index = self.owned_project_index(actor, id)?;

        let mut errors = validate_project_update(&input);
        if let Some(ref members) = input.team_members {
            errors.extend(self.unknown_members(members));
        }
        if !errors.is_empty() {
            return Err(WorkspaceError::Validation(errors));
        }

        let mut updated = self.projects[index].clone();
        if let Some(name) = input.name {
            updated.name = name.trim().to_string();
        }
        if let Some(description) = input.description {
            updated.description = description;
        }
        if let Some(status) = input.status {
            updated.status = status;
        }
        if let Some(due_date) = input.due_date {
            updated.due_date = due_date;
        }
        if let Some(team_members) = input.team_members {
            updated.team_members = team_members;
        }

        let mut projects = self.projects.clone();
        projects[index] = updated.clone();
        self.commit_projects(projects).await?;

        info!("Updated project {}", id);
        Ok(updated)
    }

    /// Deletes a project and every task that belongs to it. Returns the
    /// number of tasks removed.
    pub async fn delete_project(&mut self, actor: UserId, id: ProjectId) -> WorkspaceResult<usize> {
        let index = self.owned_project_index(actor, id)?;

        let mut projects = self.projects.clone();
        projects.remove(index);
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.project_id != id)
            .cloned()
            .collect();
        let removed = self.tasks.len() - tasks.len();

        self.commit_projects(projects).await?;
        self.commit_tasks(tasks).await?;

        info!("Deleted project {} and {} of its tasks", id, removed);
        Ok(removed)
    }

    pub(crate) fn require_user(&self, id: UserId) -> WorkspaceResult<&User> {
        self.user(id).ok_or(WorkspaceError::UserNotFound(id))
    }

    fn owned_project_index(&self, actor: UserId, id: ProjectId) -> WorkspaceResult<usize> {
        let manager = self.require_user(actor)?;
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(WorkspaceError::ProjectNotFound(id))?;

        if !manager.is_manager() || self.projects[index].manager_id != actor {
            return Err(WorkspaceError::Forbidden(format!(
                "Project {} is managed by another user",
                id
            )));
        }
        Ok(index)
    }

    fn unknown_members(&self, members: &[UserId]) -> Vec<ValidationError> {
        members
            .iter()
            .filter(|id| self.user(**id).is_none())
            .map(|id| ValidationError::new("teamMembers", format!("Unknown user id {}", id)))
            .collect()
    }

    pub(crate) async fn commit_users(&mut self, users: Vec<User>) -> WorkspaceResult<()> {
        save_collection(self.store.as_ref(), CollectionKey::Users, &users).await?;
        self.users = users;
        Ok(())
    }

    pub(crate) async fn commit_projects(&mut self, projects: Vec<Project>) -> WorkspaceResult<()> {
        save_collection(self.store.as_ref(), CollectionKey::Projects, &projects).await?;
        self.projects = projects;
        Ok(())
    }

    pub(crate) async fn commit_tasks(&mut self, tasks: Vec<Task>) -> WorkspaceResult<()> {
        save_collection(self.store.as_ref(), CollectionKey::Tasks, &tasks).await?;
        self.tasks = tasks;
        Ok(())
    }

    pub(crate) async fn commit_session(&mut self, session: Option<Session>) -> WorkspaceResult<()> {
        match session {
            Some(ref s) => {
                save_collection(self.store.as_ref(), CollectionKey::CurrentUser, s).await?
            }
            None => self.store.remove(CollectionKey::CurrentUser).await?,
        }
        self.session = session;
        Ok(())
    }
}
