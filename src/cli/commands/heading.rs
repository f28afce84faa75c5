//! Get-heading command - show the notes scoped to one heading

use crate::cli::output::{colors, print_header, print_output, print_rows};
use crate::cli::OutputFormat;
use crate::core::segment::format_heading_code;
use crate::core::services::Services;
use crate::core::types::Language;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-heading command
#[derive(Args, Debug)]
pub struct HeadingArgs {
    /// 4-digit heading code (e.g. 0101 or 01.01)
    pub code: String,

    /// Display language (vi or en)
    #[arg(long, short = 'l', default_value = "vi")]
    pub language: Language,

    /// Also list the SEN subheading codes under this heading
    #[arg(long, short = 'r')]
    pub related: bool,
}

/// Execute the get-heading command
pub async fn execute(
    args: HeadingArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = services
        .notes
        .get_heading_detail(&args.code, args.language, args.related)?;

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "Heading {} (chapter {:02})",
                colors::code(&format_heading_code(&detail.heading_code)),
                detail.chapter_number
            ));

            for (label, rows) in [("EN", &detail.en_notes), ("SEN", &detail.sen_notes)] {
                if rows.is_empty() {
                    println!("\n{} {}", colors::source(&format!("[{label}]")), colors::dim("no notes"));
                } else {
                    println!("\n{}", colors::source(&format!("[{label}]")));
                    print_rows(rows);
                }
            }

            if let Some(related) = &detail.related_codes {
                println!();
                if related.is_empty() {
                    println!("{}", colors::dim("No related subheadings."));
                } else {
                    let codes: Vec<String> =
                        related.iter().map(|c| colors::code(c).to_string()).collect();
                    println!("{} {}", colors::label("Related:"), codes.join(", "));
                }
            }
        }
        OutputFormat::Json => print_output(&detail, format),
    }

    Ok(())
}
