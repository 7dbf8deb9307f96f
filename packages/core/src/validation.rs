// ABOUTME: Input validation for users, projects and tasks
// ABOUTME: Collects every field error instead of stopping at the first one

use crate::types::{ProjectCreateInput, ProjectUpdateInput, SignupInput, TaskCreateInput};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid");
}

/// Validation error for a single input field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}


/// Validates signup data
pub fn validate_signup(data: &SignupInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "Name is required"));
    }

    if data.email.trim().is_empty() {
        errors.push(ValidationError::new("email", "Email is required"));
    } else if !EMAIL_PATTERN.is_match(data.email.trim()) {
        errors.push(ValidationError::new(
            "email",
            format!("Invalid email address: {}", data.email),
        ));
    }

    if data.password.is_empty() {
        errors.push(ValidationError::new("password", "Password is required"));
    }

    errors
}

/// Validates project data for creation
pub fn validate_project_data(data: &ProjectCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "Project name is required"));
    }

    if has_duplicates(&data.team_members) {
        errors.push(ValidationError::new(
            "teamMembers",
            "Team members must not repeat",
        ));
    }

    errors
}

/// Validates project update data
pub fn validate_project_update(data: &ProjectUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref name) = data.name {
        if name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Project name cannot be empty"));
        }
    }

    if let Some(ref members) = data.team_members {
        if has_duplicates(members) {
            errors.push(ValidationError::new(
                "teamMembers",
                "Team members must not repeat",
            ));
        }
    }

    errors
}

/// Validates task data for creation
pub fn validate_task_data(data: &TaskCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "Task name is required"));
    }

    errors
}

fn has_duplicates(ids: &[u32]) -> bool {
    ids.iter()
        .enumerate()
        .any(|(i, id)| ids[..i].contains(id))
}
