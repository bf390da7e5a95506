pub mod calculator;
pub mod weather;

use rust_mcp_schema::{CallToolResult, CallToolResultContentItem, TextContent, Tool};
use rust_mcp_sdk::tool_box;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::arguments::Arguments;

pub use calculator::{CalculatorTool, InvalidExpression, evaluate, evaluate_expression};
pub use weather::{DEFAULT_UNITS, Units, WeatherReading, WeatherTool};

tool_box!(ServerTools, [WeatherTool, CalculatorTool]);

/// Tool failures reported back to the agent inside a successful response
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Error: unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Error: expression parameter not found")]
    MissingExpression,
}

impl ToolError {
    pub fn into_result(self) -> CallToolResult {
        text_result(self.to_string(), true)
    }
}

impl ServerTools {
    /// Tool descriptors as advertised to clients.
    ///
    /// Same order as `tools()`, with the defaults the schema derive cannot express.
    pub fn catalog() -> Vec<Tool> {
        Self::tools()
            .into_iter()
            .map(|tool| {
                if tool.name == WeatherTool::tool_name() {
                    with_property_default(tool, "units", DEFAULT_UNITS)
                } else {
                    tool
                }
            })
            .collect()
    }

    /// Resolve a tool by name, pulling its parameters out of the argument map
    pub fn resolve(name: &str, args: &Arguments) -> Result<Self, ToolError> {
        if name == WeatherTool::tool_name() {
            Ok(ServerTools::WeatherTool(WeatherTool::from_arguments(args)))
        } else if name == CalculatorTool::tool_name() {
            CalculatorTool::from_arguments(args).map(ServerTools::CalculatorTool)
        } else {
            Err(ToolError::UnknownTool(name.to_string()))
        }
    }

    pub fn call(self) -> CallToolResult {
        match self {
            ServerTools::WeatherTool(weather) => weather.call(),
            ServerTools::CalculatorTool(calculator) => calculator.call(),
        }
    }
}

/// Declare `default` on an optional property in place of the derived `nullable` flag
fn with_property_default(mut tool: Tool, property: &str, default: &str) -> Tool {
    let patched = serde_json::to_value(&tool.input_schema).and_then(|mut schema| {
        if let Some(field) = schema
            .pointer_mut(&format!("/properties/{property}"))
            .and_then(Value::as_object_mut)
        {
            field.remove("nullable");
            field.insert("default".to_string(), Value::from(default));
        }
        serde_json::from_value(schema)
    });

    match patched {
        Ok(schema) => tool.input_schema = schema,
        Err(e) => warn!(tool = %tool.name, property, error = %e, "Could not set schema default"),
    }
    tool
}

/// Single text block result
pub(crate) fn text_result(text: String, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![CallToolResultContentItem::TextContent(TextContent::new(
            text, None,
        ))],
        is_error: Some(is_error),
        meta: None,
    }
}
