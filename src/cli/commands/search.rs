//! Search-notes command - keyword search over heading windows

use crate::cli::output::{colors, format_duration_ms, print_output, print_warning};
use crate::cli::OutputFormat;
use crate::core::segment::format_heading_code;
use crate::core::services::Services;
use crate::core::text::truncate_chars;
use crate::core::types::{Language, MatchType, SearchRequest};
use clap::Args;
use std::sync::Arc;

/// Snippets longer than this are shortened in human output
const SNIPPET_DISPLAY_CHARS: usize = 160;

/// Arguments for the search-notes command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword to search for
    pub keyword: String,

    /// Language of the text searched and shown (vi or en)
    #[arg(long, short = 'l', default_value = "vi")]
    pub language: Language,

    /// How the keyword is matched (tokens or exact)
    #[arg(long, short = 'm', default_value = "tokens")]
    pub match_type: MatchType,

    /// Material the heading's notes must mention
    #[arg(long)]
    pub material: Option<String>,

    /// Function or feature the heading's notes must mention
    #[arg(long)]
    pub function_feature: Option<String>,

    /// Maximum number of matches (defaults to the configured value)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Execute the search-notes command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest {
        keyword: args.keyword,
        language: Some(args.language),
        match_type: Some(args.match_type),
        material: args.material,
        function_feature: args.function_feature,
        max_results: args.limit,
    };

    let response = services.notes.search(request).inspect_err(|e| {
        if e.is_bad_request() {
            tracing::warn!("Rejected search: {e}");
        }
    })?;

    match format {
        OutputFormat::Human => {
            if response.matches.is_empty() {
                println!(
                    "No matches found for '{}'",
                    colors::label(&response.query.keyword)
                );
                return Ok(());
            }

            println!(
                "Found {} match(es) for '{}' {}:\n",
                colors::number(&response.total_matches.to_string()),
                colors::label(&response.query.keyword),
                colors::dim(&format!("in {}", format_duration_ms(response.duration_ms)))
            );

            for (i, m) in response.matches.iter().enumerate() {
                println!(
                    "[{}] {} {} {}",
                    colors::rank(&(i + 1).to_string()),
                    colors::code(&format_heading_code(&m.hs_code)),
                    colors::source(m.source.label()),
                    colors::dim(&format!("(chapter {:02})", m.chapter_number))
                );
                println!("    {}\n", truncate_chars(&m.snippet, SNIPPET_DISPLAY_CHARS));
            }

            if response.total_matches > response.matches.len() {
                print_warning(&format!(
                    "Showing {} of {} matches; raise --limit to see more",
                    response.matches.len(),
                    response.total_matches
                ));
            }
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
