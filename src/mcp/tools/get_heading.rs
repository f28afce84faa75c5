//! Get heading tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{format_rows, title_in};
use crate::core::segment::format_heading_code;
use crate::core::services::Services;
use crate::core::types::{HeadingDetail, Language};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetHeadingHandler {
    services: Arc<Services>,
}

impl GetHeadingHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_detail(&self, detail: &HeadingDetail, language: Language) -> String {
        let mut output = format!(
            "# Heading {}\n\n**Chapter {:02}:** {}\n",
            format_heading_code(&detail.heading_code),
            detail.chapter_number,
            title_in(&detail.title, language)
        );

        output.push_str("\n## Explanatory Notes (EN)\n");
        if detail.en_notes.is_empty() {
            output.push_str("\n_No EN notes for this heading._\n");
        } else {
            output.push_str(&format_rows(&detail.en_notes));
        }

        output.push_str("\n## Supplementary Explanatory Notes (SEN)\n");
        if detail.sen_notes.is_empty() {
            output.push_str("\n_No SEN notes for this heading._\n");
        } else {
            output.push_str(&format_rows(&detail.sen_notes));
        }

        if let Some(related) = &detail.related_codes {
            output.push_str("\n## Related subheadings\n\n");
            if related.is_empty() {
                output.push_str("_None declared._\n");
            }
            for code in related {
                output.push_str(&format!("- `{code}`\n"));
            }
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetHeadingHandler {
    fn name(&self) -> &str {
        "get_heading"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_heading".to_string(),
            description: "Get the EN and SEN notes scoped to one 4-digit heading (e.g. 0101 or \
                         01.01). Optionally lists the SEN subheading codes declared under it."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "headingCode": {
                        "type": "string",
                        "pattern": "^[0-9]{2}\\.?[0-9]{2}$",
                        "description": "4-digit heading code, with or without the dot"
                    },
                    "language": {
                        "type": "string",
                        "enum": ["vi", "en"],
                        "default": "vi",
                        "description": "Display language"
                    },
                    "includeRelated": {
                        "type": "boolean",
                        "default": false,
                        "description": "Also list SEN subheading codes under this heading"
                    }
                },
                "required": ["headingCode"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct HeadingArgs {
            heading_code: String,
            #[serde(default)]
            language: Language,
            #[serde(default)]
            include_related: bool,
        }

        let args: HeadingArgs = parse_args(args)?;

        let detail = self.services.notes.get_heading_detail(
            &args.heading_code,
            args.language,
            args.include_related,
        )?;

        Ok(text_content(self.format_detail(&detail, args.language)))
    }
}
