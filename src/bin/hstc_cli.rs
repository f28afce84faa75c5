//! HSTC CLI - Command-line interface for tariff note lookup
//!
//! Browse and search the EN and SEN notes without an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # List chapters with English titles
//! hstc list-chapters --language en
//!
//! # Show the notes of heading 01.01
//! hstc get-heading 01.01 --related
//!
//! # Search Vietnamese notes, restricted to headings mentioning a material
//! hstc search-notes "ngựa giống" --material "lông"
//! ```

use clap::Parser;
use hstc::cli::output::print_error;
use hstc::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Only warnings by default; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
