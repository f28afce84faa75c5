//! List chapters tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::types::{ChapterSummary, Language};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListChaptersHandler {
    services: Arc<Services>,
}

impl ListChaptersHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_chapters(&self, chapters: &[ChapterSummary]) -> String {
        if chapters.is_empty() {
            return "No chapters available.".to_string();
        }

        let mut output = format!("# Chapters ({})\n\n", chapters.len());
        output.push_str("| Chapter | Title | EN | SEN |\n");
        output.push_str("|---------|-------|----|-----|\n");

        for chapter in chapters {
            output.push_str(&format!(
                "| {:02} | {} | {} | {} |\n",
                chapter.chapter_number,
                chapter.title,
                if chapter.has_en { "yes" } else { "-" },
                if chapter.has_sen { "yes" } else { "-" }
            ));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for ListChaptersHandler {
    fn name(&self) -> &str {
        "list_chapters"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_chapters".to_string(),
            description: "List every chapter of the tariff nomenclature with its title and \
                         whether Explanatory Notes (EN) and Supplementary Explanatory Notes \
                         (SEN) exist for it. Use this to discover chapter numbers before \
                         calling get_chapter."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "language": {
                        "type": "string",
                        "enum": ["vi", "en"],
                        "default": "vi",
                        "description": "Title language. English falls back to Vietnamese when missing."
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ListArgs {
            #[serde(default)]
            language: Language,
        }

        let args: ListArgs = parse_args(args)?;
        let chapters = self.services.notes.list_chapters(args.language);

        Ok(text_content(self.format_chapters(&chapters)))
    }
}
