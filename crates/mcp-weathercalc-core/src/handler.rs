use std::collections::HashMap;

use rust_mcp_schema::{
    CallToolRequestParams, CallToolResult, CallToolResultContentItem, GetPromptRequestParams,
    GetPromptResult, ListPromptsResult, ListResourcesRequestParams, ListResourcesResult,
    ListToolsResult, PromptMessageContent, ReadResourceRequestParams, ReadResourceResult,
    ReadResourceResultContentsItem,
};
use tracing::{debug, info, instrument, warn};

use crate::arguments::Arguments;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::prompts::{ServerPrompt, prompts};
use crate::resources::{ServerResource, resources};
use crate::tools::ServerTools;

/// Core MCP server handler with transport-agnostic business logic
#[derive(Debug, Clone, Default)]
pub struct CoreHandler {
    config: ServerConfig,
}

impl CoreHandler {
    /// Create a new handler with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    #[instrument(level = "debug", skip(self))]
    pub fn list_tools(&self) -> ListToolsResult {
        debug!("Handling list_tools request");
        let tools = ServerTools::catalog();
        info!(tool_count = tools.len(), "Listed available tools");

        ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        }
    }

    /// Tool failures are reported in-band; this never produces a protocol error.
    #[instrument(level = "debug", skip(self, params), fields(tool_name = %params.name))]
    pub fn call_tool(&self, params: CallToolRequestParams) -> CallToolResult {
        let tool_name = params.name.as_str();
        let args = Arguments::from_json(params.arguments.as_ref());
        debug!(tool_name, arg_count = args.len(), "Resolving tool");

        let result = match ServerTools::resolve(tool_name, &args) {
            Ok(tool) => tool.call(),
            Err(e) => {
                warn!(tool_name, error = %e, "Tool request rejected");
                e.into_result()
            }
        };

        if result.is_error == Some(true) {
            warn!(tool_name, "Tool execution reported an error");
        } else {
            info!(tool_name, "Tool execution completed successfully");
        }
        result
    }

    /// The cursor is accepted but ignored; the catalog fits on one page.
    #[instrument(level = "debug", skip(self, _params))]
    pub fn list_resources(
        &self,
        _params: Option<ListResourcesRequestParams>,
    ) -> ListResourcesResult {
        debug!("Handling list_resources request");
        let resources = resources();
        info!(resource_count = resources.len(), "Listed available resources");

        ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        }
    }

    #[instrument(level = "debug", skip(self, params), fields(uri = %params.uri))]
    pub fn read_resource(&self, params: ReadResourceRequestParams) -> Result<ReadResourceResult> {
        let resource = ServerResource::from_uri(&params.uri).inspect_err(|e| {
            warn!(uri = %params.uri, error = %e, "Rejected resource read");
        })?;
        let contents = resource.read()?;
        info!(uri = %params.uri, "Read resource");

        Ok(ReadResourceResult {
            contents: vec![contents],
            meta: None,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("Handling list_prompts request");
        let prompts = prompts();
        info!(prompt_count = prompts.len(), "Listed available prompts");

        ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        }
    }

    #[instrument(level = "debug", skip(self, params), fields(prompt = %params.name))]
    pub fn get_prompt(&self, params: GetPromptRequestParams) -> Result<GetPromptResult> {
        let prompt = ServerPrompt::from_name(&params.name).inspect_err(|e| {
            warn!(prompt = %params.name, error = %e, "Rejected prompt request");
        })?;
        info!(prompt = %params.name, "Rendered prompt");
        Ok(prompt.render(params.arguments.as_ref()))
    }
}

fn call_text(result: &CallToolResult) -> &str {
    match result.content.first() {
        Some(CallToolResultContentItem::TextContent(text)) => &text.text,
        _ => "",
    }
}

/// Exercise every handler once and log what comes back
pub async fn self_test() -> anyhow::Result<()> {
    let handler = CoreHandler::new();
    info!(
        name = %handler.config().name,
        version = %handler.config().version,
        "Testing weathercalc handler implementation"
    );

    let tools = handler.list_tools().tools;
    info!("list_tools: {} tools available", tools.len());
    for tool in &tools {
        info!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }

    let weather = handler.call_tool(CallToolRequestParams {
        name: "weather".to_string(),
        arguments: serde_json::json!({ "location": "Tokyo" }).as_object().cloned(),
    });
    if weather.is_error == Some(true) {
        anyhow::bail!("weather tool failed: {}", call_text(&weather));
    }
    info!("weather: {}", call_text(&weather).replace('\n', " | "));

    let calculation = handler.call_tool(CallToolRequestParams {
        name: "calculator".to_string(),
        arguments: serde_json::json!({ "expression": "6 * 7" }).as_object().cloned(),
    });
    if calculation.is_error == Some(true) {
        anyhow::bail!("calculator tool failed: {}", call_text(&calculation));
    }
    info!("calculator: {}", call_text(&calculation));

    for resource in handler.list_resources(None).resources {
        let read = handler.read_resource(ReadResourceRequestParams {
            uri: resource.uri.clone(),
        })?;
        let size = read
            .contents
            .iter()
            .map(|item| match item {
                ReadResourceResultContentsItem::TextResourceContents(text) => text.text.len(),
                _ => 0,
            })
            .sum::<usize>();
        info!("read_resource {}: {} bytes", resource.uri, size);
    }

    for prompt in handler.list_prompts().prompts {
        let result = handler.get_prompt(GetPromptRequestParams {
            arguments: Some(HashMap::new()),
            name: prompt.name.clone(),
        })?;
        let lines = result
            .messages
            .iter()
            .map(|message| match &message.content {
                PromptMessageContent::TextContent(text) => text.text.lines().count(),
                _ => 0,
            })
            .sum::<usize>();
        info!("get_prompt {}: {} lines", prompt.name, lines);
    }

    info!("Handler self-test passed");
    Ok(())
}
