//! Get server info tool handler
//!
//! Reports the running hstc-mcp version, its configuration limits and
//! the size of the loaded note snapshot.

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetServerInfoHandler {
    services: Arc<Services>,
}

impl GetServerInfoHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let stats = self.services.store.stats();
        let search = &self.services.config.search;

        let mut output = String::from("# HSTC MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n"));
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Loaded Notes\n");
        output.push_str(&format!(
            "- **Data directory:** `{}`\n",
            self.services.config.data.dir.display()
        ));
        output.push_str(&format!(
            "- **Indexed chapters:** {}\n",
            stats.indexed_chapters
        ));
        for (label, counts) in [("EN", &stats.en), ("SEN", &stats.sen)] {
            output.push_str(&format!(
                "- **{label}:** {} chapters, {} rows, {} heading windows\n",
                counts.chapters, counts.rows, counts.windows
            ));
        }
        output.push_str(&format!(
            "- **Loaded at:** {}\n\n",
            stats.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("## Search Limits\n");
        output.push_str(&format!(
            "- **Default max results:** {}\n",
            search.default_max_results
        ));
        output.push_str(&format!("- **Max results:** {}\n", search.max_results));
        output.push_str(&format!(
            "- **Max keyword length:** {} chars\n",
            search.max_keyword_length
        ));
        output.push_str(&format!(
            "- **Max filter length:** {} chars\n\n",
            search.max_filter_length
        ));

        output.push_str("## Available Tools\n");
        output.push_str("- list_chapters: List chapters with EN/SEN availability\n");
        output.push_str("- get_chapter: Full notes of one chapter\n");
        output.push_str("- get_heading: Notes scoped to one 4-digit heading\n");
        output.push_str("- search_notes: Keyword search over heading notes\n");
        output.push_str("- get_server_info: Show server information (this tool)\n");

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version information about the running hstc-mcp server together \
                         with its search limits and the size of the loaded EN and SEN notes."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_info()))
    }
}
