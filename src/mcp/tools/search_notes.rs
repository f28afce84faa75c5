//! Search notes tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::segment::format_heading_code;
use crate::core::services::Services;
use crate::core::text::truncate_chars;
use crate::core::types::{SearchRequest, SearchResponse};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

const MAX_SNIPPET_CHARS: usize = 500;

pub struct SearchNotesHandler {
    services: Arc<Services>,
}

impl SearchNotesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, response: &SearchResponse) -> String {
        let mut output = format!(
            "Found {} matches for '{}' ({}ms)",
            response.total_matches, response.query.keyword, response.duration_ms
        );
        if response.total_matches > response.matches.len() {
            output.push_str(&format!(", showing first {}", response.matches.len()));
        }
        output.push_str(":\n\n");

        let filters = &response.query.filters;
        if let Some(material) = &filters.material {
            output.push_str(&format!("**Material:** {material}\n"));
        }
        if let Some(feature) = &filters.function_feature {
            output.push_str(&format!("**Function/feature:** {feature}\n"));
        }

        if response.matches.is_empty() {
            output.push_str(
                "No matches. Try fewer keywords, matchType 'tokens', or drop the filters.",
            );
            return output;
        }

        for (i, m) in response.matches.iter().enumerate() {
            output.push_str(&format!(
                "\n## {}. {} ({}, chapter {:02})\n\n",
                i + 1,
                format_heading_code(&m.hs_code),
                m.source.label(),
                m.chapter_number
            ));
            output.push_str(&truncate_chars(&m.snippet, MAX_SNIPPET_CHARS));
            output.push('\n');
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for SearchNotesHandler {
    fn name(&self) -> &str {
        "search_notes"
    }

    fn schema(&self) -> ToolSchema {
        let limits = self.services.search.limits();

        ToolSchema {
            name: "search_notes".to_string(),
            description: "Search the EN and SEN notes by keyword. Every note row that matches \
                         is reported with the 4-digit heading it belongs to. Matching is \
                         case-insensitive; Vietnamese diacritics are significant. \
                         'tokens' requires every word somewhere in the row, 'exact' requires \
                         the whole keyword as written. Material and function filters must \
                         appear somewhere in the heading's notes. Results come EN first, then \
                         SEN, by ascending chapter."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "minLength": 1,
                        "maxLength": limits.max_keyword_length,
                        "description": "Keyword to search for"
                    },
                    "language": {
                        "type": "string",
                        "enum": ["vi", "en"],
                        "default": "vi",
                        "description": "Language of the text searched and returned"
                    },
                    "matchType": {
                        "type": "string",
                        "enum": ["tokens", "exact"],
                        "default": "tokens"
                    },
                    "material": {
                        "type": "string",
                        "maxLength": limits.max_filter_length,
                        "description": "Material the heading's notes must mention"
                    },
                    "functionFeature": {
                        "type": "string",
                        "maxLength": limits.max_filter_length,
                        "description": "Function or feature the heading's notes must mention"
                    },
                    "maxResults": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": limits.max_results,
                        "default": limits.default_max_results
                    }
                },
                "required": ["keyword"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request: SearchRequest = parse_args(args)?;
        let response = self.services.notes.search(request)?;

        Ok(text_content(self.format_results(&response)))
    }
}
