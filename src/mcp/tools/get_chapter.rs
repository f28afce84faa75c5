//! Get chapter tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{format_rows, title_in};
use crate::core::services::Services;
use crate::core::types::{ChapterDetail, Language, SourceSelector};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetChapterHandler {
    services: Arc<Services>,
}

impl GetChapterHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_detail(&self, detail: &ChapterDetail, language: Language) -> String {
        let mut output = format!(
            "# Chapter {:02}: {}\n",
            detail.chapter_number,
            title_in(&detail.title, language)
        );

        if let Some(rows) = &detail.en_notes {
            output.push_str("\n## Explanatory Notes (EN)\n");
            output.push_str(&format_rows(rows));
        }
        if let Some(rows) = &detail.sen_notes {
            output.push_str("\n## Supplementary Explanatory Notes (SEN)\n");
            output.push_str(&format_rows(rows));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetChapterHandler {
    fn name(&self) -> &str {
        "get_chapter"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_chapter".to_string(),
            description: "Get the full notes of one chapter (1-99) from the Explanatory Notes, \
                         the Supplementary Explanatory Notes, or both. Fails when the selected \
                         source has no notes for the chapter."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "chapterNumber": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 99,
                        "description": "Chapter number"
                    },
                    "source": {
                        "type": "string",
                        "enum": ["en", "sen", "both"],
                        "default": "both",
                        "description": "Which notes to return"
                    },
                    "language": {
                        "type": "string",
                        "enum": ["vi", "en"],
                        "default": "vi",
                        "description": "Display language"
                    }
                },
                "required": ["chapterNumber"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ChapterArgs {
            chapter_number: i64,
            #[serde(default)]
            source: SourceSelector,
            #[serde(default)]
            language: Language,
        }

        let args: ChapterArgs = parse_args(args)?;

        let detail =
            self.services
                .notes
                .get_chapter_detail(args.chapter_number, args.source, args.language)?;

        Ok(text_content(self.format_detail(&detail, args.language)))
    }
}
