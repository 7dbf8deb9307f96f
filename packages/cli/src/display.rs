// ABOUTME: Table and text rendering for CLI output
// ABOUTME: Resolves ids to names; anything that no longer resolves renders blank

use chrono::NaiveDate;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use stratos_core::truncate;
use stratos_projects::{
    AnalysisResult, DashboardStats, Project, ProjectId, ProjectStatus, Sentiment, Task,
    TaskStatus, User, UserId,
};

const BAR_WIDTH: usize = 10;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Name of user `id`, or an empty string if they are gone
pub fn user_name(users: &[User], id: UserId) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.name.clone())
        .unwrap_or_default()
}

/// Name of project `id`, or an empty string if it was deleted
pub fn project_name(projects: &[Project], id: ProjectId) -> String {
    projects
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_default()
}

pub fn member_names(users: &[User], ids: &[UserId]) -> String {
    ids.iter()
        .map(|id| user_name(users, *id))
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn project_status_label(status: ProjectStatus) -> ColoredString {
    match status {
        ProjectStatus::ToDo => status.to_string().normal(),
        ProjectStatus::InProgress => status.to_string().yellow(),
        ProjectStatus::Done => status.to_string().green(),
    }
}

pub fn task_status_label(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::ToDo => status.to_string().normal(),
        TaskStatus::InProgress => status.to_string().yellow(),
        TaskStatus::Done => status.to_string().green(),
        TaskStatus::Blocked => status.to_string().red(),
    }
}

pub fn sentiment_label(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.to_string().green().bold(),
        Sentiment::Negative => sentiment.to_string().red().bold(),
        Sentiment::Neutral => sentiment.to_string().yellow().bold(),
    }
}

/// Fixed-width load bar, one cell per 10%
pub fn workload_bar(load_percent: u8) -> String {
    let filled = (usize::from(load_percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn projects_table(projects: &[&Project], users: &[User]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Status", "Due", "Manager", "Team"]);

    for project in projects {
        table.add_row(vec![
            project.id.to_string(),
            truncate(&project.name, 30),
            project_status_label(project.status).to_string(),
            project.due_date.to_string(),
            user_name(users, project.manager_id),
            truncate(&member_names(users, &project.team_members), 40),
        ]);
    }
    table
}

pub fn tasks_table(
    tasks: &[&Task],
    projects: &[Project],
    users: &[User],
    today: NaiveDate,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Task", "Project", "Status", "Due", "Assignee"]);

    for task in tasks {
        let due = if task.is_overdue(today) {
            format!("{} (overdue)", task.due_date).red().to_string()
        } else {
            task.due_date.to_string()
        };

        table.add_row(vec![
            task.id.to_string(),
            truncate(&task.name, 30),
            truncate(&project_name(projects, task.project_id), 25),
            task_status_label(task.status).to_string(),
            due,
            user_name(users, task.assigned_to),
        ]);
    }
    table
}

pub fn workload_table(stats: &DashboardStats) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Team Member", "Load", "Open Tasks"]);

    for member in &stats.team_workload {
        table.add_row(vec![
            member.name.clone(),
            format!("{} {:>3}%", workload_bar(member.load_percent), member.load_percent),
            member.open_tasks.to_string(),
        ]);
    }
    table
}

/// Multi-line rendering of an analysis result
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut lines = vec![
        format!("{} {}", "Summary:".bold(), result.summary),
        format!(
            "{} {} ({})",
            "Sentiment:".bold(),
            sentiment_label(result.sentiment),
            result.sentiment_detail
        ),
        format!("{} {}", "Keywords:".bold(), result.keywords.join(", ")),
        "Action items:".bold().to_string(),
    ];
    lines.extend(
        result
            .action_items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("  {}. {}", i + 1, item)),
    );
    lines.join("\n")
}
