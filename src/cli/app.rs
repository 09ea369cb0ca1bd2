//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{item, reorder, view};
use crate::domain::StatusFilter;
use crate::storage::{Config, OutputPreference, Workspace};

#[derive(Parser)]
#[command(name = "tick")]
#[command(author, version, about = "Local-first todo list for the command line")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a tick workspace
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Add an item to the top of the list
    Add {
        /// Item title
        title: String,
    },

    /// List items
    List {
        /// Status filter (all, active, done)
        #[arg(long, short = 'F')]
        filter: Option<StatusFilter>,

        /// Case-insensitive substring search on titles
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Retitle an item in place
    Edit {
        /// Item ID (or unique prefix)
        id: String,

        /// New title
        title: String,
    },

    /// Flip an item's completion flag
    Toggle {
        /// Item ID (or unique prefix)
        id: String,
    },

    /// Remove an item
    Rm {
        /// Item ID (or unique prefix)
        id: String,
    },

    /// Remove all items
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move an item to a new position within the visible list
    Move {
        /// Item ID (or unique prefix)
        id: String,

        /// Target position (1-based) within the visible list
        position: usize,

        /// Status filter defining the visible list (all, active, done)
        #[arg(long, short = 'F')]
        filter: Option<StatusFilter>,

        /// Search query defining the visible list
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show the completion summary
    Status,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli.format.unwrap_or(match config.global.default_format {
        OutputPreference::Text => OutputFormat::Text,
        OutputPreference::Json => OutputFormat::Json,
    });
    let output = Output::new(format, cli.verbose);

    output.verbose("Tick CLI starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing workspace at: {}", path));
            let workspace = Workspace::init(&path)?;
            output.success(&format!(
                "Initialized tick workspace at {}",
                workspace.root().display()
            ));
        }

        Commands::Add { title } => item::add(&output, &title)?,
        Commands::List { filter, search } => view::list(&output, filter, search.as_deref())?,
        Commands::Edit { id, title } => item::edit(&output, &id, &title)?,
        Commands::Toggle { id } => item::toggle(&output, &id)?,
        Commands::Rm { id } => item::remove(&output, &id)?,
        Commands::Clear { yes } => item::clear(&output, yes)?,

        Commands::Move {
            id,
            position,
            filter,
            search,
        } => reorder::move_item(&output, &id, position, filter, search.as_deref())?,

        Commands::Status => view::status(&output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
