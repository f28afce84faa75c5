//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    GetChapterHandler, GetHeadingHandler, GetServerInfoHandler, ListChaptersHandler,
    SearchNotesHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        registry.register(Arc::new(ListChaptersHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetChapterHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetHeadingHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(SearchNotesHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetServerInfoHandler::new(Arc::clone(&services))));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(Value::Null) | None => InitializeParams::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| McpError::InvalidParams(e.to_string()))?,
        };

        match &params.client_info {
            Some(client) => info!("Client initialized: {}", client.name),
            None => info!("Client initialized"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "hstc-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Notification: nothing is sent back
        Ok(JsonRpcResponse::empty())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(JsonRpcResponse::success(request.id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let Some(params_value) = request.params.clone() else {
            return Ok(JsonRpcResponse::failure(
                request.id,
                INVALID_PARAMS,
                "Missing params".to_string(),
            ));
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let Some(handler) = self.tool_registry.get(&params.name) else {
            return Ok(JsonRpcResponse::failure(
                request.id,
                INVALID_REQUEST,
                format!("Tool not found: {}", params.name),
            ));
        };

        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                let (code, message) = e.to_rpc_error();
                if code == INVALID_PARAMS {
                    warn!("Rejected {} call: {}", params.name, message);
                }
                Ok(JsonRpcResponse::failure(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}
