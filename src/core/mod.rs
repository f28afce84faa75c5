//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (CLI, MCP, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **corpus**: Immutable note snapshot and its loaders
//! - **segment**: Heading code extraction and window segmentation
//! - **search**: Keyword matching and result capping
//! - **notes**: Chapter, heading and search operations
//! - **services**: Unified service container
//! - **text**: Display truncation shared by the adapters

pub mod config;
pub mod corpus;
pub mod error;
pub mod notes;
pub mod search;
pub mod segment;
pub mod services;
pub mod text;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{HstcError, Result};
pub use services::Services;
