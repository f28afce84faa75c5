//! MCP-specific error types

use crate::core::error::HstcError;
use crate::mcp::protocol::{
    DATA_UNAVAILABLE, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, NOT_FOUND, PARSE_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and client-facing message
    pub fn to_rpc_error(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<HstcError> for McpError {
    fn from(err: HstcError) -> Self {
        match err {
            HstcError::InvalidArgument { field, message } => {
                McpError::InvalidParams(format!("Invalid {field}: {message}"))
            }
            HstcError::NotFound(s) => McpError::ToolError(NOT_FOUND, format!("Not found: {s}")),
            HstcError::DataUnavailable(s) => {
                McpError::ToolError(DATA_UNAVAILABLE, format!("Note data unavailable: {s}"))
            }
            HstcError::ConfigError(s) => {
                McpError::InternalError(format!("Configuration error: {s}"))
            }
            HstcError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            HstcError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            HstcError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
