//! Saloon CLI
//!
//! Command-line interface for the saloon registry

use clap::{Parser, Subcommand};
use saloon_core::logging_facility;
use std::path::PathBuf;

mod commands;
mod settings;

use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "saloon")]
#[command(about = "Saloon registry - listings, services and ratings", long_about = None)]
struct Cli {
    /// SQLite database file (overrides configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Principal to act as (overrides configuration)
    #[arg(long, global = true)]
    caller: Option<String>,

    /// Configuration file (default: ./saloon.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every saloon
    List,
    /// Show one saloon
    Get(commands::get::GetArgs),
    /// Create a saloon owned by the caller
    Create(commands::create::CreateArgs),
    /// Append a service to a saloon
    AddService(commands::add_service::AddServiceArgs),
    /// Delete a saloon
    Delete(commands::delete::DeleteArgs),
    /// Rate a saloon
    Rate(commands::rate::RateArgs),
    /// Update a saloon's details
    Update(commands::update::UpdateArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(cli.db, cli.caller);
    logging_facility::init(settings.logging_profile()?);
    tracing::debug!(db = %settings.database.path.display(), "opening store");

    let mut service = commands::open_service(&settings)?;

    match cli.command {
        Commands::List => commands::list::execute(&service),
        Commands::Get(args) => commands::get::execute(args, &service),
        Commands::Create(args) => commands::create::execute(args, &mut service),
        Commands::AddService(args) => commands::add_service::execute(args, &mut service),
        Commands::Delete(args) => commands::delete::execute(args, &mut service),
        Commands::Rate(args) => commands::rate::execute(args, &mut service),
        Commands::Update(args) => commands::update::execute(args, &mut service),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
