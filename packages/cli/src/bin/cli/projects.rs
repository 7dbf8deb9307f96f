use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use colored::*;
use inquire::{Confirm, Select, Text};
use stratos_cli::display::{member_names, project_status_label, projects_table};
use stratos_projects::{ProjectCreateInput, ProjectId, ProjectStatus, ProjectUpdateInput, Workspace};

use super::utils::{actor, parse_date, pick_users, prompt_date};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ProjectStatusArg {
    Todo,
    InProgress,
    Done,
}

impl From<ProjectStatusArg> for ProjectStatus {
    fn from(status: ProjectStatusArg) -> Self {
        match status {
            ProjectStatusArg::Todo => ProjectStatus::ToDo,
            ProjectStatusArg::InProgress => ProjectStatus::InProgress,
            ProjectStatusArg::Done => ProjectStatus::Done,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectsCommands {
    /// List the projects you can see
    List,
    /// Show project details and its tasks
    Show {
        /// Project ID to show
        id: ProjectId,
    },
    /// Add a new project (managers only)
    Add {
        /// Project name
        #[arg(short, long)]
        name: Option<String>,
        /// Project description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
        /// Initial status
        #[arg(short, long, value_enum)]
        status: Option<ProjectStatusArg>,
    },
    /// Edit a project you manage
    Edit {
        /// Project ID to edit
        id: ProjectId,
    },
    /// Delete a project you manage, together with its tasks
    Delete {
        /// Project ID to delete
        id: ProjectId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_projects_command(
    ws: &mut Workspace,
    command: ProjectsCommands,
) -> anyhow::Result<()> {
    match command {
        ProjectsCommands::List => list_projects(ws),
        ProjectsCommands::Show { id } => show_project(ws, id),
        ProjectsCommands::Add {
            name,
            description,
            due,
            status,
        } => add_project(ws, name, description, due, status).await,
        ProjectsCommands::Edit { id } => edit_project(ws, id).await,
        ProjectsCommands::Delete { id, yes } => delete_project_cmd(ws, id, yes).await,
    }
}

fn list_projects(ws: &Workspace) -> anyhow::Result<()> {
    ws.require_current_user()?;
    let projects = ws.visible_projects();

    if projects.is_empty() {
        println!("{}", "No projects found".yellow());
        return Ok(());
    }

    println!("{}", "StratOS Projects".blue().bold());
    println!();
    println!("{}", projects_table(&projects, ws.users()));
    println!("Total: {} projects", projects.len().to_string().cyan());
    Ok(())
}

fn show_project(ws: &Workspace, id: ProjectId) -> anyhow::Result<()> {
    let project = ws
        .visible_projects()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow::anyhow!("Project {} not found", id))?;

    println!("{}", format!("Project Details - {}", project.name).blue().bold());
    println!();
    println!("{} {}", "ID:".bold(), project.id);
    println!("{} {}", "Status:".bold(), project_status_label(project.status));
    println!("{} {}", "Due:".bold(), project.due_date);
    println!("{} {}", "Description:".bold(), project.description);
    println!(
        "{} {}",
        "Team:".bold(),
        member_names(ws.users(), &project.team_members)
    );

    let tasks = ws.tasks_for_project(project.id);
    println!("{} {}", "Tasks:".bold(), tasks.len());
    for task in tasks {
        println!("  #{} {} [{}]", task.id, task.name, task.status);
    }
    Ok(())
}

async fn add_project(
    ws: &mut Workspace,
    name: Option<String>,
    description: Option<String>,
    due: Option<NaiveDate>,
    status: Option<ProjectStatusArg>,
) -> anyhow::Result<()> {
    let manager = actor(ws)?;
    anyhow::ensure!(manager.is_manager(), "Only managers can create projects");

    println!("{}", "Add New Project".blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Text::new("Project name:").prompt()?,
    };
    let description = match description {
        Some(d) => d,
        None => Text::new("Description:").prompt()?,
    };
    let due_date = match due {
        Some(d) => d,
        None => prompt_date("Due date:", None)?,
    };
    let status = match status {
        Some(s) => s.into(),
        None => Select::new(
            "Status:",
            vec![ProjectStatus::ToDo, ProjectStatus::InProgress, ProjectStatus::Done],
        )
        .prompt()?,
    };
    let team_members = pick_users("Team members:", ws.team_members(), &[])?;

    let project = ws
        .create_project(
            manager.id,
            ProjectCreateInput {
                name,
                description,
                status: Some(status),
                due_date,
                team_members,
            },
        )
        .await?;

    println!(
        "{} Created project {} (ID {})",
        "✓".green(),
        project.name.bold(),
        project.id
    );
    Ok(())
}

async fn edit_project(ws: &mut Workspace, id: ProjectId) -> anyhow::Result<()> {
    let manager = actor(ws)?;
    let project = ws
        .project(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Project {} not found", id))?;

    println!("{}", format!("Edit Project - {}", project.name).blue().bold());
    println!();

    let name = Text::new("Project name:")
        .with_default(&project.name)
        .prompt()?;
    let description = Text::new("Description:")
        .with_default(&project.description)
        .prompt()?;
    let due_date = prompt_date("Due date:", Some(project.due_date))?;
    let statuses = vec![ProjectStatus::ToDo, ProjectStatus::InProgress, ProjectStatus::Done];
    let current = statuses
        .iter()
        .position(|s| *s == project.status)
        .unwrap_or(0);
    let status = Select::new("Status:", statuses)
        .with_starting_cursor(current)
        .prompt()?;
    let team_members = pick_users("Team members:", ws.team_members(), &project.team_members)?;

    let updated = ws
        .update_project(
            manager.id,
            id,
            ProjectUpdateInput {
                name: Some(name),
                description: Some(description),
                status: Some(status),
                due_date: Some(due_date),
                team_members: Some(team_members),
            },
        )
        .await?;

    println!("{} Updated project {}", "✓".green(), updated.name.bold());
    Ok(())
}

async fn delete_project_cmd(ws: &mut Workspace, id: ProjectId, yes: bool) -> anyhow::Result<()> {
    let manager = actor(ws)?;
    let project = ws
        .project(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Project {} not found", id))?;
    let task_count = ws.tasks_for_project(id).len();

    if !yes {
        let confirmed = Confirm::new(&format!(
            "Delete project '{}' and its {} tasks?",
            project.name, task_count
        ))
        .with_default(false)
        .prompt()?;

        if !confirmed {
            println!("{}", "Deletion cancelled".yellow());
            return Ok(());
        }
    }

    let removed = ws.delete_project(manager.id, id).await?;
    println!(
        "{} Deleted project {} and {} tasks",
        "✓".green(),
        project.name.bold(),
        removed
    );
    Ok(())
}
