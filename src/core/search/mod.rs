//! Keyword search over heading windows

mod engine;
mod matcher;
mod query;

pub use engine::SearchService;
pub use matcher::{match_windows, Matcher};
pub use query::{validate_search_request, SearchLimits};
