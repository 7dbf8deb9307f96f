use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use colored::*;
use inquire::{Select, Text};
use stratos_cli::display::tasks_table;
use stratos_projects::{ProjectId, TaskCreateInput, TaskId, TaskStatus, UserId, Workspace};

use super::utils::{actor, parse_date, pick_user, prompt_date, today};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TaskStatusArg {
    Todo,
    InProgress,
    Done,
    Blocked,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(status: TaskStatusArg) -> Self {
        match status {
            TaskStatusArg::Todo => TaskStatus::ToDo,
            TaskStatusArg::InProgress => TaskStatus::InProgress,
            TaskStatusArg::Done => TaskStatus::Done,
            TaskStatusArg::Blocked => TaskStatus::Blocked,
        }
    }
}

#[derive(Subcommand)]
pub enum TasksCommands {
    /// List the tasks you can see
    List {
        /// Only tasks of this project
        #[arg(short, long)]
        project: Option<ProjectId>,
    },
    /// Add a task to a project
    Add {
        /// Project ID
        #[arg(short, long)]
        project: Option<ProjectId>,
        /// Task name
        #[arg(short, long)]
        name: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
        /// Assignee user ID
        #[arg(short, long)]
        assignee: Option<UserId>,
    },
    /// Change a task's status
    Status {
        id: TaskId,
        #[arg(value_enum)]
        status: TaskStatusArg,
    },
    /// Reassign a task to another user
    Assign { id: TaskId, user: UserId },
}

pub async fn handle_tasks_command(
    ws: &mut Workspace,
    command: TasksCommands,
) -> anyhow::Result<()> {
    match command {
        TasksCommands::List { project } => list_tasks(ws, project),
        TasksCommands::Add {
            project,
            name,
            description,
            due,
            assignee,
        } => add_task(ws, project, name, description, due, assignee).await,
        TasksCommands::Status { id, status } => {
            let task = ws.update_task_status(id, status.into()).await?;
            println!("{} Task #{} is now {}", "✓".green(), task.id, task.status);
            Ok(())
        }
        TasksCommands::Assign { id, user } => {
            let task = ws.reassign_task(id, user).await?;
            let assignee = ws
                .user(task.assigned_to)
                .map(|u| u.name.clone())
                .unwrap_or_default();
            println!("{} Task #{} assigned to {}", "✓".green(), task.id, assignee);
            Ok(())
        }
    }
}

fn list_tasks(ws: &Workspace, project: Option<ProjectId>) -> anyhow::Result<()> {
    ws.require_current_user()?;
    let tasks: Vec<_> = ws
        .visible_tasks()
        .into_iter()
        .filter(|t| project.map_or(true, |id| t.project_id == id))
        .collect();

    if tasks.is_empty() {
        println!("{}", "No tasks found".yellow());
        return Ok(());
    }

    println!("{}", tasks_table(&tasks, ws.projects(), ws.users(), today()));
    println!("Total: {} tasks", tasks.len().to_string().cyan());
    Ok(())
}

async fn add_task(
    ws: &mut Workspace,
    project: Option<ProjectId>,
    name: Option<String>,
    description: Option<String>,
    due: Option<NaiveDate>,
    assignee: Option<UserId>,
) -> anyhow::Result<()> {
    let user = actor(ws)?;

    println!("{}", "Add New Task".blue().bold());
    println!();

    let project_id = match project {
        Some(id) => id,
        None => {
            let projects: Vec<_> = ws.visible_projects().into_iter().cloned().collect();
            anyhow::ensure!(!projects.is_empty(), "No projects to add a task to");
            let names: Vec<String> = projects
                .iter()
                .map(|p| format!("#{} {}", p.id, p.name))
                .collect();
            let picked = Select::new("Project:", names).raw_prompt()?;
            projects[picked.index].id
        }
    };
    let name = match name {
        Some(n) => n,
        None => Text::new("Task name:").prompt()?,
    };
    let description = match description {
        Some(d) => d,
        None => Text::new("Description:").prompt()?,
    };
    let due_date = match due {
        Some(d) => d,
        None => prompt_date("Due date:", None)?,
    };
    let assigned_to = match assignee {
        Some(id) => id,
        None => pick_user("Assign to:", ws.users())?,
    };

    let task = ws
        .create_task(
            user.id,
            TaskCreateInput {
                project_id,
                name,
                description,
                status: None,
                due_date,
                assigned_to,
            },
        )
        .await?;

    println!(
        "{} Created task {} (ID {})",
        "✓".green(),
        task.name.bold(),
        task.id
    );
    Ok(())
}
