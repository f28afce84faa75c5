//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod chapter;
pub mod chapters;
pub mod completions;
pub mod config;
pub mod heading;
pub mod info;
pub mod search;

// Re-export argument types for use in mod.rs
pub use chapter::ChapterArgs;
pub use chapters::ListChaptersArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use heading::HeadingArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
