use clap::Args;
use colored::*;
use inquire::Select;
use stratos_cli::display::{format_analysis, workload_table};
use stratos_projects::{ProjectId, Workspace};

use super::utils::{actor, today};

#[derive(Args)]
pub struct ConvertArgs {
    /// Project that receives the task
    #[arg(short, long)]
    project: ProjectId,
    /// Action item text; omit to pick one from your latest analysis
    item: Vec<String>,
}

pub async fn analyze(ws: &mut Workspace, text: &str) -> anyhow::Result<()> {
    anyhow::ensure!(!text.trim().is_empty(), "Nothing to analyze: text is empty");
    let user = actor(ws)?;

    println!(
        "{}",
        format!("Analyzing as {} ({})...", user.name, user.role).dimmed()
    );
    let result = ws.analyze(text).await?;

    println!();
    println!("{}", format_analysis(&result));
    println!();
    println!(
        "{}",
        "Use 'stratos convert --project <id>' to turn an action item into a task".dimmed()
    );
    Ok(())
}

pub fn history(ws: &Workspace, limit: usize) -> anyhow::Result<()> {
    ws.require_current_user()?;
    let records = ws.history();

    if records.is_empty() {
        println!("{}", "No analyses yet".yellow());
        return Ok(());
    }

    for record in records.iter().take(limit) {
        println!(
            "{} {}",
            record.timestamp.format("%Y-%m-%d %H:%M").to_string().cyan(),
            record.input.bold()
        );
        println!("{}", format_analysis(&record.output));
        println!();
    }
    println!("Showing {} of {} analyses", limit.min(records.len()), records.len());
    Ok(())
}

pub async fn convert(ws: &mut Workspace, args: ConvertArgs) -> anyhow::Result<()> {
    let user = actor(ws)?;

    let item = if args.item.is_empty() {
        let latest = ws
            .history()
            .first()
            .map(|record| record.output.action_items.clone())
            .unwrap_or_default();
        anyhow::ensure!(
            !latest.is_empty(),
            "No action items available; run 'stratos analyze' first"
        );
        Select::new("Action item:", latest).prompt()?
    } else {
        args.item.join(" ")
    };

    let task = ws
        .convert_action_item(user.id, &item, args.project, today())
        .await?;

    println!(
        "{} Created task {} (ID {}) due {}",
        "✓".green(),
        task.name.bold(),
        task.id,
        task.due_date
    );
    Ok(())
}

pub fn dashboard(ws: &Workspace) -> anyhow::Result<()> {
    let stats = ws.dashboard(today())?;

    println!("{}", "Dashboard".blue().bold());
    println!();
    println!("{} {}", "Total projects:".bold(), stats.total_projects);
    println!("{} {}", "Completed tasks:".bold(), stats.completed_tasks.to_string().green());
    println!("{} {}", "Active tasks:".bold(), stats.active_tasks);
    println!("{} {}", "In progress:".bold(), stats.in_progress_tasks.to_string().yellow());
    println!("{} {}", "Overdue:".bold(), stats.overdue_tasks.to_string().red());

    if !stats.team_workload.is_empty() {
        println!();
        println!("{}", "Team Workload".blue().bold());
        println!("{}", workload_table(&stats));
    }
    Ok(())
}
