//! Persona Control - CLI for the robot personality diagnosis tool.
//!
//! Runs the interactive questionnaire, manages robot aliases and prints
//! history and aggregate statistics from the local diagnosis store.

mod commands;
mod config;
mod display;
mod logging;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::CtlConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "personactl")]
#[command(about = "Robot-interaction personality diagnosis", long_about = None)]
#[command(version)]
struct Cli {
    /// Database path override (default: XDG data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive diagnosis session
    Diagnose {
        /// Catalog variant (see `personactl locations`)
        #[arg(long)]
        location: Option<String>,

        /// Robot alias to diagnose against
        #[arg(long)]
        robot: Option<String>,

        /// Load a custom catalog from a TOML file instead
        #[arg(long, conflicts_with = "location")]
        catalog: Option<PathBuf>,
    },

    /// Show past diagnoses
    History {
        /// Limit to one robot
        #[arg(long)]
        robot: Option<String>,
    },

    /// Aggregate statistics over all stored diagnoses
    Stats {
        /// Break down by: gender, age-group, occupation, robot, location
        #[arg(long)]
        group_by: Option<String>,

        /// Include the per-day trend table
        #[arg(long)]
        trend: bool,
    },

    /// Manage robot aliases
    Robots {
        #[command(subcommand)]
        action: RobotsCommand,
    },

    /// List built-in catalog variants
    Locations,

    /// Affinity between two category codes
    Compat {
        /// User's category code, e.g. ENFP
        user: String,
        /// Robot's category code, e.g. ISTJ
        robot: String,
    },

    /// Show or update configuration
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

#[derive(Subcommand)]
enum RobotsCommand {
    /// List registered robots
    List,
    /// Register a robot alias
    Add {
        name: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a robot alias (at least one must remain)
    Remove { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = CtlConfig::load();
    let db = commands::db_location(cli.db.clone(), &config);

    match cli.command {
        Commands::Diagnose {
            location,
            robot,
            catalog,
        } => commands::diagnose(db, config, location, robot, catalog).await,
        Commands::History { robot } => commands::history(db, config, robot).await,
        Commands::Stats { group_by, trend } => commands::show_stats(db, group_by, trend).await,
        Commands::Robots { action } => match action {
            RobotsCommand::List => commands::robots_list(db, config).await,
            RobotsCommand::Add { name, description } => {
                commands::robots_add(db, config, name, description).await
            }
            RobotsCommand::Remove { name } => commands::robots_remove(db, config, name).await,
        },
        Commands::Locations => commands::locations(),
        Commands::Compat { user, robot } => commands::compat(user, robot),
        Commands::Config { set } => commands::config_cmd(config, set),
    }
}
