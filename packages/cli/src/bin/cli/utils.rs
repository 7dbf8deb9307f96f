// ABOUTME: Shared helpers for CLI subcommands
// ABOUTME: Date parsing, the signed-in actor and user pickers for prompts

use std::fmt;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use inquire::{MultiSelect, Select};
use stratos_projects::{User, UserId, Workspace};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// clap value parser for YYYY-MM-DD dates
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({})", e))
}

/// The signed-in user, cloned so the workspace can be mutated afterwards
pub fn actor(ws: &Workspace) -> anyhow::Result<User> {
    Ok(ws.require_current_user()?.clone())
}

pub fn prompt_date(message: &str, default: Option<NaiveDate>) -> anyhow::Result<NaiveDate> {
    let default = default.unwrap_or_else(today).to_string();
    let raw = inquire::Text::new(message)
        .with_default(&default)
        .with_help_message("YYYY-MM-DD")
        .prompt()?;
    parse_date(&raw).map_err(anyhow::Error::msg)
}

/// Display wrapper so users can be offered in prompts
#[derive(Clone)]
pub struct UserChoice {
    pub id: UserId,
    label: String,
}

impl UserChoice {
    pub fn new(user: &User) -> Self {
        Self {
            id: user.id,
            label: format!("{} <{}> ({})", user.name, user.email, user.role),
        }
    }
}

impl fmt::Display for UserChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn pick_user<'a>(
    message: &str,
    users: impl IntoIterator<Item = &'a User>,
) -> anyhow::Result<UserId> {
    let choices: Vec<UserChoice> = users.into_iter().map(UserChoice::new).collect();
    anyhow::ensure!(!choices.is_empty(), "No users to choose from");
    Ok(Select::new(message, choices).prompt()?.id)
}

/// Multi-select over `users`, pre-selecting `selected`
pub fn pick_users<'a>(
    message: &str,
    users: impl IntoIterator<Item = &'a User>,
    selected: &[UserId],
) -> anyhow::Result<Vec<UserId>> {
    let choices: Vec<UserChoice> = users.into_iter().map(UserChoice::new).collect();
    if choices.is_empty() {
        return Ok(Vec::new());
    }
    let defaults: Vec<usize> = choices
        .iter()
        .enumerate()
        .filter(|(_, c)| selected.contains(&c.id))
        .map(|(i, _)| i)
        .collect();

    let picked = MultiSelect::new(message, choices)
        .with_default(&defaults)
        .prompt()
        .context("Team member selection cancelled")?;
    Ok(picked.into_iter().map(|c| c.id).collect())
}
