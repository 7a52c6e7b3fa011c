//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{discover, log_cmd, search_cmd, ship, terminal_cmd};

#[derive(Parser)]
#[command(name = "stardock")]
#[command(author, version, about = "Sidecar metadata for project directories")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory to operate on (defaults to the current directory)
    #[arg(long = "dir", short = 'C', global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the ship document (directory identity)
    #[command(subcommand)]
    Ship(ship::ShipCommands),

    /// Manage the captain's log
    #[command(subcommand)]
    Captainslog(log_cmd::LogCommands),

    /// Manage the terminal session
    #[command(subcommand)]
    Terminal(terminal_cmd::TerminalCommands),

    /// Add tags to the ship (alias for 'ship add-tag')
    Add {
        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from the ship (alias for 'ship remove-tag')
    Remove {
        /// Tags to remove
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Add or update a fleet membership (alias for 'ship fleet-add')
    Fleet {
        /// Fleet name
        name: String,

        /// Rank within the fleet
        #[arg(long)]
        rank: Option<u32>,

        /// Star glyph shown in summaries
        #[arg(long)]
        star: Option<String>,

        /// Role within the fleet
        #[arg(long)]
        role: Option<String>,
    },

    /// Search documents for matching text
    Search {
        /// Search query
        query: String,

        /// Root directory to search (defaults to the working directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Scan this directory and immediate subdirectories for ships
    Discover,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);
    let dir = cli.dir;

    output.verbose(&format!("Stardock starting in {}", dir.display()));

    match cli.command {
        Commands::Ship(cmd) => ship::run(cmd, &dir, &output)?,
        Commands::Captainslog(cmd) => log_cmd::run(cmd, &dir, &output)?,
        Commands::Terminal(cmd) => terminal_cmd::run(cmd, &dir, &output)?,

        Commands::Add { tags } => ship::add_tags(&dir, &output, &tags)?,
        Commands::Remove { tags } => ship::remove_tags(&dir, &output, &tags)?,
        Commands::Fleet {
            name,
            rank,
            star,
            role,
        } => ship::fleet_add(&dir, &output, &name, rank, star, role)?,

        Commands::Search { query, path } => {
            let root = path.unwrap_or_else(|| dir.clone());
            search_cmd::run(&output, &root, &query)?
        }

        Commands::Discover => discover::run(&dir, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
