//! MCP server implementation using rmcp over stdio transport.
//!
//! Exposes the documentation catalog as resources and four tools
//! (get-template, lint-code, search-docs, generate-reducer). Every request
//! is handled independently against static data; the only per-server state
//! is the lint rule selection fixed at startup.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ListResourcesResult, ListToolsResult,
    PaginatedRequestParams, ReadResourceRequestParams, ReadResourceResult, ServerCapabilities,
    ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler, ServiceExt};

use crate::config::schema::TcaMcpConfig;

use super::resources;
use super::tools::{tool_catalog, ToolDispatcher};

// ---------------------------------------------------------------------------
// Server struct
// ---------------------------------------------------------------------------

/// tca-mcp server.
///
/// The dispatcher is shared behind an `Arc` to satisfy the `Clone` bound of
/// rmcp's `ServerHandler`; it is never mutated after construction.
#[derive(Clone)]
pub struct TcaServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl std::fmt::Debug for TcaServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcaServer").finish_non_exhaustive()
    }
}

impl TcaServer {
    pub fn new() -> Self {
        Self::with_config(&TcaMcpConfig::default())
    }

    pub fn with_config(config: &TcaMcpConfig) -> Self {
        Self {
            dispatcher: Arc::new(ToolDispatcher::new(config)),
        }
    }

    /// Protocol-independent `call_tool`, shared by the handler and tests.
    pub fn dispatch_tool_call(
        &self,
        request: CallToolRequestParams,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = %request.name, "call_tool");
        match self.dispatcher.call(&request.name, request.arguments) {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                tracing::warn!(tool = %request.name, error = %e, "tool call rejected");
                Err(e.into())
            }
        }
    }

    /// Protocol-independent `read_resource`, shared by the handler and tests.
    pub fn read_resource_contents(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        tracing::debug!(uri, "read_resource");
        resources::read_resource(uri).map_err(|e| {
            tracing::warn!(uri, error = %e, "resource read rejected");
            e.into()
        })
    }
}

impl Default for TcaServer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ServerHandler impl
// ---------------------------------------------------------------------------

impl ServerHandler for TcaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Composable Architecture helper. Read tca://docs/* resources or call \
                 search-docs for guides, get-template for complete features, \
                 generate-reducer for new feature skeletons, and lint-code to check \
                 Swift reducers for common mistakes."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: rmcp::model::Implementation {
                name: "tca-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        tracing::debug!("list_resources");
        std::future::ready(Ok(ListResourcesResult {
            meta: None,
            next_cursor: None,
            resources: resources::list_resources(),
        }))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        std::future::ready(self.read_resource_contents(&request.uri))
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        tracing::debug!("list_tools");
        std::future::ready(Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: tool_catalog(),
        }))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool_call(request)
    }
}

// ---------------------------------------------------------------------------
// Public entry point: run the MCP server over stdio
// ---------------------------------------------------------------------------

/// Start the MCP server on stdin/stdout.
///
/// This blocks until the client disconnects or Ctrl-C is received.
pub async fn run_server(config: TcaMcpConfig) -> Result<(), Box<dyn std::error::Error>> {
    let server = TcaServer::with_config(&config);
    let transport = rmcp::transport::io::stdio();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        disabled_rules = ?config.lint.disabled_rules,
        "starting MCP server on stdio"
    );
    let running = server.serve(transport).await.inspect_err(|e| {
        tracing::error!("MCP server error: {}", e);
    })?;
    tokio::select! {
        _ = running.waiting() => tracing::info!("client disconnected"),
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupt received, shutting down"),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{ErrorCode, RawContent};
    use serde_json::json;

    fn request(name: &str, arguments: serde_json::Value) -> CallToolRequestParams {
        serde_json::from_value(json!({ "name": name, "arguments": arguments })).unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn info_advertises_tools_and_resources() {
        let info = TcaServer::new().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert_eq!(info.server_info.name, "tca-mcp");
    }

    #[tokio::test]
    async fn call_tool_wraps_text_in_success_envelope() {
        let server = TcaServer::new();
        let result = server
            .dispatch_tool_call(request("search-docs", json!({"query": "effects"})))
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert!(text_of(&result).contains("tca://docs/effects"));
    }

    #[tokio::test]
    async fn unknown_template_is_successful_call() {
        let server = TcaServer::new();
        let result = server
            .dispatch_tool_call(request("get-template", json!({"template": "nonexistent"})))
            .unwrap();
        assert!(text_of(&result).starts_with("Unknown template"));
    }

    #[tokio::test]
    async fn unknown_tool_is_protocol_error() {
        let server = TcaServer::new();
        let err = server
            .dispatch_tool_call(request("not-a-real-tool", json!({})))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("not-a-real-tool"));
    }

    #[tokio::test]
    async fn missing_arguments_is_protocol_error() {
        let server = TcaServer::new();
        let params: CallToolRequestParams =
            serde_json::from_value(json!({ "name": "lint-code" })).unwrap();
        assert!(params.arguments.is_none());
        let err = server.dispatch_tool_call(params).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn read_unknown_resource_is_not_found() {
        let err = TcaServer::new()
            .read_resource_contents("tca://docs/nope")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[test]
    fn read_known_resource_returns_contents() {
        let result = TcaServer::new()
            .read_resource_contents("tca://docs/testing")
            .unwrap();
        assert_eq!(result.contents.len(), 1);
    }
}
