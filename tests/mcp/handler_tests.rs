//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::create_test_services;
    use hstc::mcp::handlers::ProtocolHandlers;
    use hstc::mcp::protocol::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn create_test_handlers() -> (ProtocolHandlers, TempDir) {
        let (services, temp_dir) = create_test_services();
        (ProtocolHandlers::new(services), temp_dir)
    }

    fn call(id: i64, name: &str, arguments: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: "tools/call".to_string(),
            params: Some(json!({"name": name, "arguments": arguments})),
        }
    }

    fn text_of(response: &JsonRpcResponse) -> String {
        let result = response.result.as_ref().expect("tool call should succeed");
        result["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let (handlers, _temp) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "hstc-mcp");
    }

    #[tokio::test]
    async fn test_initialized_handler() {
        let (handlers, _temp) = create_test_handlers();
        assert!(!handlers.is_initialized());

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "initialized".to_string(),
            params: Some(json!({})),
        };

        let response = handlers.handle_initialized(request).await.unwrap();
        assert!(response.is_empty());
        assert!(handlers.is_initialized());
    }

    #[tokio::test]
    async fn test_tools_list_has_all_tools() {
        let (handlers, _temp) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();
        let result = response.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "get_chapter",
                "get_heading",
                "get_server_info",
                "list_chapters",
                "search_notes"
            ]
        );
        for tool in result["tools"].as_array().unwrap() {
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_list_chapters_tool() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(3, "list_chapters", json!({"language": "en"})))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.starts_with("# Chapters (3)"));
        assert!(text.contains("Meat and edible meat offal"));
        assert!(text.contains("Cá và động vật giáp xác"));
    }

    #[tokio::test]
    async fn test_get_chapter_tool() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(
                4,
                "get_chapter",
                json!({"chapterNumber": 3, "source": "both"}),
            ))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.starts_with("# Chapter 03: Cá và động vật giáp xác"));
        assert!(text.contains("## Explanatory Notes (EN)"));
        assert!(!text.contains("## Supplementary Explanatory Notes (SEN)"));
    }

    #[tokio::test]
    async fn test_get_chapter_tool_not_found() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(
                5,
                "get_chapter",
                json!({"chapterNumber": 2, "source": "en"}),
            ))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, NOT_FOUND);
        assert!(response.result.is_none());
    }

    #[tokio::test]
    async fn test_get_heading_tool_related() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(
                6,
                "get_heading",
                json!({"headingCode": "01.01", "includeRelated": true}),
            ))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.contains("## Related subheadings"));
        assert!(text.contains("- `0101.21.00`"));
        assert!(text.contains("- `0101.29`"));
    }

    #[tokio::test]
    async fn test_get_heading_tool_invalid_code() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(7, "get_heading", json!({"headingCode": "ngựa"})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_search_notes_tool() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(
                8,
                "search_notes",
                json!({"keyword": "thịt", "maxResults": 2}),
            ))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.starts_with("Found 7 matches for 'thịt'"));
        assert!(text.contains("showing first 2"));
        assert!(text.contains("## 1. 01.02 (EN, chapter 01)"));
        assert!(text.contains("## 2. 02.01 (SEN, chapter 02)"));
    }

    #[tokio::test]
    async fn test_search_notes_tool_rejects_bad_request() {
        let (handlers, _temp) = create_test_handlers();

        for arguments in [
            json!({}),
            json!({"keyword": ""}),
            json!({"keyword": "ngựa", "maxResults": 0}),
            json!({"keyword": "ngựa", "matchType": "fuzzy"}),
        ] {
            let response = handlers
                .handle_tools_call(call(9, "search_notes", arguments))
                .await
                .unwrap();
            assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
        }
    }

    #[tokio::test]
    async fn test_get_server_info_tool() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(10, "get_server_info", Value::Null))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.contains("## Loaded Notes"));
        assert!(text.contains("## Search Limits"));
        assert!(text.contains("search_notes"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (handlers, _temp) = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(11, "translate_notes", json!({})))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("translate_notes"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let (handlers, _temp) = create_test_handlers();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(12)),
            method: "tools/call".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_call(request).await.unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }
}
