//! Markdown formatting helpers for MCP tools

use crate::core::types::{BilingualTitle, Language, NoteRow, RowKind};

/// Title in the requested language, Vietnamese when English is missing
pub fn title_in(title: &BilingualTitle, language: Language) -> &str {
    match language {
        Language::En if !title.en.is_empty() => &title.en,
        _ => &title.vi,
    }
}

/// Render note rows as Markdown
pub fn format_rows(rows: &[NoteRow]) -> String {
    let mut output = String::new();
    for row in rows {
        match row.kind {
            RowKind::Heading => output.push_str(&format!("\n**{}**\n\n", row.text)),
            RowKind::List => output.push_str(&format!("- {}\n", row.text)),
            RowKind::Paragraph => output.push_str(&format!("{}\n\n", row.text)),
        }
    }
    output
}
