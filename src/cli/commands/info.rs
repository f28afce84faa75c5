//! Get-server-info command - show version and loaded data

use crate::cli::output::{colors, format_relative_time, print_output};
use crate::cli::OutputFormat;
use crate::core::corpus::CorpusStats;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the get-server-info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show per-corpus row and window counts
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub tools: u32,
    pub data_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<CorpusStats>,
}

/// Execute the get-server-info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = InfoResponse {
        name: "hstc".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: "MCP 2024-11-05".to_string(),
        tools: 5,
        data_dir: services.config.data.dir.to_string_lossy().into_owned(),
        corpus: args.detailed.then(|| services.store.stats()),
    };

    match format {
        OutputFormat::Human => {
            println!("hstc {}", info.version);
            println!("Protocol: {}", info.protocol);
            println!("Tools: {}", info.tools);
            println!("Data: {}", info.data_dir);
            println!(
                "Chapters: {}",
                colors::number(&services.store.chapter_index().len().to_string())
            );
            if let Some(stats) = &info.corpus {
                for (label, counts) in [("EN", &stats.en), ("SEN", &stats.sen)] {
                    println!(
                        "  {}: {} chapters, {} rows, {} windows",
                        colors::source(label),
                        counts.chapters,
                        counts.rows,
                        counts.windows
                    );
                }
                println!(
                    "Loaded: {}",
                    colors::dim(&format_relative_time(&stats.loaded_at))
                );
            }
        }
        OutputFormat::Json => print_output(&info, format),
    }

    Ok(())
}
