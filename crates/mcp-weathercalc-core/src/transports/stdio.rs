use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::handler::CoreHandler;
use async_trait::async_trait;
use rust_mcp_schema::{
    CallToolRequest, CallToolResult, GetPromptRequest, GetPromptResult, ListPromptsRequest,
    ListPromptsResult, ListResourcesRequest, ListResourcesResult, ListToolsRequest,
    ListToolsResult, ReadResourceRequest, ReadResourceResult, RpcError,
    schema_utils::CallToolError,
};
use rust_mcp_sdk::{
    McpServer, StdioTransport, TransportOptions,
    mcp_server::{ServerHandler, server_runtime},
};
use tracing::{debug, error, info, instrument};

/// Stdio transport handler that wraps the core handler
pub struct StdioHandler {
    core: CoreHandler,
}

impl StdioHandler {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            core: CoreHandler::with_config(config),
        }
    }
}

#[async_trait]
impl ServerHandler for StdioHandler {
    /// Handles requests to list available tools
    #[instrument(level = "debug", skip(self, _request, _runtime))]
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        debug!("Stdio transport: handling list_tools request");
        Ok(self.core.list_tools())
    }

    /// Handles requests to call a specific tool
    #[instrument(level = "debug", skip(self, _runtime), fields(tool_name = %request.params.name))]
    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        debug!(tool_name = %request.params.name, "Stdio transport: handling call_tool request");
        Ok(self.core.call_tool(request.params))
    }

    /// Handles requests to list available resources
    #[instrument(level = "debug", skip(self, _runtime))]
    async fn handle_list_resources_request(
        &self,
        request: ListResourcesRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ListResourcesResult, RpcError> {
        debug!("Stdio transport: handling list_resources request");
        Ok(self.core.list_resources(request.params))
    }

    /// Handles requests to read a resource by URI
    #[instrument(level = "debug", skip(self, _runtime), fields(uri = %request.params.uri))]
    async fn handle_read_resource_request(
        &self,
        request: ReadResourceRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ReadResourceResult, RpcError> {
        debug!(uri = %request.params.uri, "Stdio transport: handling read_resource request");
        self.core.read_resource(request.params).map_err(RpcError::from)
    }

    /// Handles requests to list available prompts
    #[instrument(level = "debug", skip(self, _request, _runtime))]
    async fn handle_list_prompts_request(
        &self,
        _request: ListPromptsRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ListPromptsResult, RpcError> {
        debug!("Stdio transport: handling list_prompts request");
        Ok(self.core.list_prompts())
    }

    /// Handles requests to render a prompt
    #[instrument(level = "debug", skip(self, _runtime), fields(prompt = %request.params.name))]
    async fn handle_get_prompt_request(
        &self,
        request: GetPromptRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<GetPromptResult, RpcError> {
        debug!(prompt = %request.params.name, "Stdio transport: handling get_prompt request");
        self.core.get_prompt(request.params).map_err(RpcError::from)
    }
}

impl Default for StdioHandler {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Run the MCP server with stdio transport
#[instrument(level = "info", skip(config), fields(name = %config.name, version = %config.version))]
pub async fn run_stdio_server(config: ServerConfig) -> Result<()> {
    info!("Initializing stdio transport handler");
    let server_details = config.server_details();
    let handler = StdioHandler::new(config);

    info!("Starting MCP server with stdio transport");

    let transport = StdioTransport::new(TransportOptions::default())
        .map_err(|e| Error::transport(format!("Failed to create stdio transport: {}", e)))?;

    let server = server_runtime::create_server(server_details, transport, handler);

    info!("Starting stdio server");
    server.start().await.map_err(|e| {
        error!(error = %e, "Stdio server startup failed");
        Error::transport(format!("Server error: {}", e))
    })?;

    info!("Stdio server stopped");
    Ok(())
}
