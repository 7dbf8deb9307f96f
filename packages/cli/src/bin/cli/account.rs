// ABOUTME: Account subcommands for the stratos CLI
// ABOUTME: Sign-up, log-in, log-out, whoami and demo seeding

use clap::{Args, ValueEnum};
use colored::*;
use inquire::{Password, Select, Text};
use stratos_projects::{Role, SignupInput, Workspace};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RoleArg {
    Manager,
    Member,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Manager => Role::Manager,
            RoleArg::Member => Role::TeamMember,
        }
    }
}

#[derive(Args)]
pub struct AccountArgs {
    /// Full name
    #[arg(short, long)]
    name: Option<String>,
    /// Email address
    #[arg(short, long)]
    email: Option<String>,
    /// Account role
    #[arg(short, long, value_enum)]
    role: Option<RoleArg>,
}

pub async fn signup(ws: &mut Workspace, args: AccountArgs) -> anyhow::Result<()> {
    println!("{}", "Create Account".blue().bold());
    println!();

    let name = match args.name {
        Some(n) => n,
        None => Text::new("Name:").prompt()?,
    };
    let email = match args.email {
        Some(e) => e,
        None => Text::new("Email:").prompt()?,
    };
    let role = match args.role {
        Some(r) => r.into(),
        None => Select::new("Role:", vec![Role::TeamMember, Role::Manager]).prompt()?,
    };
    let password = Password::new("Password:").prompt()?;

    let user = ws
        .sign_up(SignupInput {
            name,
            email,
            password,
            role,
        })
        .await?;

    println!(
        "{} Welcome, {} ({})",
        "✓".green(),
        user.name.bold(),
        user.role
    );
    Ok(())
}

pub async fn login(ws: &mut Workspace, email: Option<String>) -> anyhow::Result<()> {
    let email = match email {
        Some(e) => e,
        None => Text::new("Email:").prompt()?,
    };
    let password = Password::new("Password:").without_confirmation().prompt()?;

    let user = ws.log_in(&email, &password).await?;
    println!("{} Signed in as {} ({})", "✓".green(), user.name.bold(), user.role);
    Ok(())
}

pub async fn logout(ws: &mut Workspace) -> anyhow::Result<()> {
    if ws.current_user().is_none() {
        println!("{}", "Nobody is signed in".yellow());
        return Ok(());
    }
    ws.log_out().await?;
    println!("{} Signed out", "✓".green());
    Ok(())
}

pub fn whoami(ws: &Workspace) -> anyhow::Result<()> {
    let user = ws.require_current_user()?;
    println!("{} <{}>", user.name.bold(), user.email);
    println!("{} {}", "Role:".dimmed(), user.role);
    println!(
        "{} {}",
        "Focus areas:".dimmed(),
        user.analysis_preferences.focus_areas.join(", ")
    );
    println!(
        "{} {}",
        "Sentiment focus:".dimmed(),
        user.analysis_preferences.sentiment_focus
    );
    Ok(())
}

pub async fn seed(ws: &mut Workspace) -> anyhow::Result<()> {
    let password = Password::new("Password for the demo accounts:").prompt()?;

    if ws.seed_demo(&password).await? {
        println!("{} Demo workspace created", "✓".green());
        println!(
            "{}",
            "Sign in as sarah@company.com (Manager) or mike@company.com, alex@company.com, emma@company.com"
                .dimmed()
        );
    } else {
        println!("{}", "Workspace already has data, nothing seeded".yellow());
    }
    Ok(())
}
