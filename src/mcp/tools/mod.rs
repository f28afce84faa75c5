//! MCP tool implementations
//!
//! This module contains the tool handlers that expose the note
//! lookup operations to MCP clients.

pub mod get_chapter;
pub mod get_heading;
pub mod get_server_info;
pub mod handler;
pub mod helpers;
pub mod list_chapters;
pub mod registry;
pub mod search_notes;

pub use get_chapter::GetChapterHandler;
pub use get_heading::GetHeadingHandler;
pub use get_server_info::GetServerInfoHandler;
pub use handler::{parse_args, text_content, McpToolHandler};
pub use helpers::{format_rows, title_in};
pub use list_chapters::ListChaptersHandler;
pub use registry::ToolRegistry;
pub use search_notes::SearchNotesHandler;
