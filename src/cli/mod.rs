//! CLI adapter for HSTC
//!
//! Provides a command-line interface to the note lookup operations.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// HSTC - Bilingual HS tariff note lookup
///
/// Browse and search the Explanatory Notes (EN) and Supplementary
/// Explanatory Notes (SEN) in Vietnamese or English.
#[derive(Parser, Debug)]
#[command(name = "hstc")]
#[command(version)]
#[command(about = "Bilingual HS tariff note lookup", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all chapters with EN/SEN availability
    #[command(name = "list-chapters")]
    ListChapters(commands::ListChaptersArgs),

    /// Show the full notes of one chapter
    #[command(name = "get-chapter")]
    GetChapter(commands::ChapterArgs),

    /// Show the notes of one 4-digit heading
    #[command(name = "get-heading")]
    GetHeading(commands::HeadingArgs),

    /// Search notes by keyword
    #[command(name = "search-notes")]
    SearchNotes(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and loaded data information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  hstc completions bash > ~/.local/share/bash-completion/completions/hstc
    ///   zsh:   hstc completions zsh > ~/.zfunc/_hstc
    ///   fish:  hstc completions fish > ~/.config/fish/completions/hstc.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    let config = Config::load_with_xdg(&xdg)?;

    // Without a snapshot no command can answer
    let services = Arc::new(Services::load(config)?);

    match cli.command {
        Commands::ListChapters(args) => {
            commands::chapters::execute(args, &services, cli.format).await
        }
        Commands::GetChapter(args) => commands::chapter::execute(args, &services, cli.format).await,
        Commands::GetHeading(args) => commands::heading::execute(args, &services, cli.format).await,
        Commands::SearchNotes(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
