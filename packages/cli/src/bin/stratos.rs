use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use std::sync::Arc;

mod cli;

use cli::account::AccountArgs;
use cli::insights::ConvertArgs;
use cli::projects::ProjectsCommands;
use cli::tasks::TasksCommands;
use stratos_cli::{init_tracing, Config};
use stratos_projects::{
    CollectionStore, CredentialStorage, InsightService, JsonFileStore, Workspace,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "stratos")]
#[command(about = "StratOS - role-aware project management with mock AI insights")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup(AccountArgs),
    /// Sign in with email and password
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Load the demo dataset into an empty workspace
    Seed,
    /// Manage projects
    #[command(subcommand)]
    Projects(ProjectsCommands),
    /// Manage tasks
    #[command(subcommand)]
    Tasks(TasksCommands),
    /// Analyze text from your role's perspective
    Analyze {
        /// Text to analyze
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show your previous analyses
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
    /// Turn an action item into a task
    Convert(ConvertArgs),
    /// Show statistics for your projects and tasks
    Dashboard,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.log_filter);

    let mut workspace = open_workspace(&config).await?;
    handle_command(command, &mut workspace).await
}

async fn open_workspace(config: &Config) -> anyhow::Result<Workspace> {
    debug!("Opening workspace at {}", config.data_dir.display());
    let store: Arc<dyn CollectionStore> = Arc::new(JsonFileStore::new(config.data_dir.clone()));
    let authenticator = Arc::new(CredentialStorage::new(store.clone()));
    let insights = InsightService::new().with_delay(config.analysis_delay);
    Ok(Workspace::open_with(store, authenticator, insights).await?)
}

async fn handle_command(command: Commands, ws: &mut Workspace) -> anyhow::Result<()> {
    match command {
        Commands::Signup(args) => cli::account::signup(ws, args).await,
        Commands::Login { email } => cli::account::login(ws, email).await,
        Commands::Logout => cli::account::logout(ws).await,
        Commands::Whoami => cli::account::whoami(ws),
        Commands::Seed => cli::account::seed(ws).await,
        Commands::Projects(projects_cmd) => {
            cli::projects::handle_projects_command(ws, projects_cmd).await
        }
        Commands::Tasks(tasks_cmd) => cli::tasks::handle_tasks_command(ws, tasks_cmd).await,
        Commands::Analyze { text } => cli::insights::analyze(ws, &text.join(" ")).await,
        Commands::History { limit } => cli::insights::history(ws, limit),
        Commands::Convert(args) => cli::insights::convert(ws, args).await,
        Commands::Dashboard => cli::insights::dashboard(ws),
    }
}
