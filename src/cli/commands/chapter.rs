//! Get-chapter command - show the full notes of a chapter

use crate::cli::output::{colors, print_header, print_output, print_rows};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{Language, NoteRow, SourceSelector};
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-chapter command
#[derive(Args, Debug)]
pub struct ChapterArgs {
    /// Chapter number (1-99)
    pub chapter: i64,

    /// Which notes to show (en, sen or both)
    #[arg(long, short = 's', default_value = "both")]
    pub source: SourceSelector,

    /// Display language (vi or en)
    #[arg(long, short = 'l', default_value = "vi")]
    pub language: Language,
}

/// Execute the get-chapter command
pub async fn execute(
    args: ChapterArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = services
        .notes
        .get_chapter_detail(args.chapter, args.source, args.language)?;

    match format {
        OutputFormat::Human => {
            let title = match args.language {
                Language::En if !detail.title.en.is_empty() => &detail.title.en,
                _ => &detail.title.vi,
            };
            print_header(&format!("Chapter {:02}: {title}", detail.chapter_number));

            print_section("EN", detail.en_notes.as_deref());
            print_section("SEN", detail.sen_notes.as_deref());
        }
        OutputFormat::Json => print_output(&detail, format),
    }

    Ok(())
}

fn print_section(label: &str, rows: Option<&[NoteRow]>) {
    let Some(rows) = rows else {
        return;
    };

    println!(
        "\n{} {}",
        colors::source(&format!("[{label}]")),
        colors::dim(&format!("{} row(s)", rows.len()))
    );
    print_rows(rows);
}
