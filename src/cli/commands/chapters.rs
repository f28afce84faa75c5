//! List-chapters command - list every indexed chapter

use crate::cli::output::{colors, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::Language;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-chapters command
#[derive(Args, Debug)]
pub struct ListChaptersArgs {
    /// Title language (vi or en)
    #[arg(long, short = 'l', default_value = "vi")]
    pub language: Language,

    /// Only list chapters that have SEN notes
    #[arg(long)]
    pub sen_only: bool,
}

/// Execute the list-chapters command
pub async fn execute(
    args: ListChaptersArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut chapters = services.notes.list_chapters(args.language);
    if args.sen_only {
        chapters.retain(|c| c.has_sen);
    }

    match format {
        OutputFormat::Human => {
            if chapters.is_empty() {
                println!("No chapters available.");
                return Ok(());
            }

            println!(
                "{} chapter(s):\n",
                colors::number(&chapters.len().to_string())
            );
            for chapter in &chapters {
                let en = if chapter.has_en { "EN" } else { "  " };
                let sen = if chapter.has_sen { "SEN" } else { "   " };
                println!(
                    "  {}  {} {}  {}",
                    colors::code(&format!("{:02}", chapter.chapter_number)),
                    colors::source(en),
                    colors::source(sen),
                    chapter.title
                );
            }
        }
        OutputFormat::Json => print_output(&chapters, format),
    }

    Ok(())
}
