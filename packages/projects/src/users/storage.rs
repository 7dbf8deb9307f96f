// ABOUTME: Account operations for the workspace
// ABOUTME: Passwords go through the authenticator; user records never hold them

use chrono::Utc;
use stratos_core::{
    next_id, validate_signup, AnalysisPreferences, Role, Session, SignupInput, User, UserId,
};
use tracing::{debug, info};

use crate::manager::{Workspace, WorkspaceError, WorkspaceResult};

impl Workspace {
    /// Registers a new account and signs it in
    pub async fn sign_up(&mut self, input: SignupInput) -> WorkspaceResult<User> {
        let errors = validate_signup(&input);
        if !errors.is_empty() {
            return Err(WorkspaceError::Validation(errors));
        }

        let email = input.email.trim().to_string();
        if self.user_by_email(&email).is_some() {
            return Err(WorkspaceError::DuplicateEmail(email));
        }

        let user = User {
            id: next_id(self.users.iter().map(|u| u.id)),
            name: input.name.trim().to_string(),
            email,
            role: input.role,
            analysis_preferences: AnalysisPreferences::for_role(input.role),
        };

        self.authenticator.enroll(user.id, &input.password).await?;

        let mut users = self.users.clone();
        users.push(user.clone());
        self.commit_users(users).await?;
        self.start_session(user.id).await?;

        info!("Signed up {} as {} (id {})", user.email, user.role, user.id);
        Ok(user)
    }

    /// Signs in with email and password. Unknown emails and wrong passwords
    /// produce the same error.
    pub async fn log_in(&mut self, email: &str, password: &str) -> WorkspaceResult<User> {
        let user = self
            .user_by_email(email)
            .cloned()
            .ok_or(WorkspaceError::InvalidCredentials)?;

        if !self.authenticator.verify(user.id, password).await? {
            debug!("Rejected password for user {}", user.id);
            return Err(WorkspaceError::InvalidCredentials);
        }

        self.start_session(user.id).await?;
        info!("User {} logged in", user.id);
        Ok(user)
    }

    pub async fn log_out(&mut self) -> WorkspaceResult<()> {
        if let Some(session) = self.session.as_ref() {
            info!("User {} logged out", session.user_id);
        }
        self.commit_session(None).await
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().and_then(|s| self.user(s.user_id))
    }

    /// The signed-in user, or `NotSignedIn`
    pub fn require_current_user(&self) -> WorkspaceResult<&User> {
        self.current_user().ok_or(WorkspaceError::NotSignedIn)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Case-insensitive lookup on the trimmed address
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Every user with the Team Member role
    pub fn team_members(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.role == Role::TeamMember)
            .collect()
    }

    async fn start_session(&mut self, user_id: UserId) -> WorkspaceResult<()> {
        self.commit_session(Some(Session {
            user_id,
            signed_in_at: Utc::now(),
        }))
        .await
    }
}
