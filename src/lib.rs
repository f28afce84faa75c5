//! HSTC - Bilingual HS Tariff Note Lookup
//!
//! Serves the Explanatory Notes (EN) and Supplementary Explanatory
//! Notes (SEN) of the customs tariff nomenclature in Vietnamese and
//! English. Notes are held fully in memory as flat row sequences per
//! chapter and segmented into heading-scoped windows.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - corpus (immutable snapshot + data-supply interface)
//!   - segment (heading code extraction, window segmentation)
//!   - search (keyword matcher, query engine)
//!   - notes (chapter/heading/search operations)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! # Key Features
//!
//! - Heading windows precomputed once at load, never mutated
//! - Token (conjunctive) and exact substring matching
//! - Material / function filters scoped to the whole heading window
//! - Deterministic scan order (EN before SEN, ascending chapters)

// Core domain logic (protocol-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::corpus::{CorpusSource, CorpusStore, JsonCorpusSource};
pub use core::error::{HstcError, Result};
pub use core::services::Services;
pub use core::types::*;
