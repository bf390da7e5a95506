use rust_mcp_schema::{
    Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesPrompts,
    ServerCapabilitiesResources, ServerCapabilitiesTools,
};

use crate::protocol::PROTOCOL_VERSION;

/// The default name of this MCP server
pub const SERVER_NAME: &str = "weathercalc";

/// The default version advertised to clients
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTRUCTIONS: &str = "Weather and calculator MCP server.

TOOLS:
- weather: mock current conditions for a location (units: metric|imperial, default metric)
- calculator: evaluates a single binary operation such as '12 * 4' (+, -, *, /)

RESOURCES:
- resource://knowledge-base/articles: usage notes and FAQ
- resource://system/status: JSON status snapshot

PROMPTS:
- weather-report: detailed weather report template (location, units)
- calculation-help: explains the calculator";

/// Immutable server settings, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub instructions: Option<String>,
}

impl ServerConfig {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    /// Capabilities advertised in the initialize result.
    ///
    /// Resource subscriptions are not offered since no subscription handler exists.
    pub fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities {
            tools: Some(ServerCapabilitiesTools {
                list_changed: Some(true),
            }),
            prompts: Some(ServerCapabilitiesPrompts {
                list_changed: Some(true),
            }),
            resources: Some(ServerCapabilitiesResources {
                list_changed: None,
                subscribe: None,
            }),
            completions: None,
            experimental: None,
            logging: None,
        }
    }

    pub fn server_info(&self) -> Implementation {
        Implementation {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }

    pub fn server_details(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: self.capabilities(),
            server_info: self.server_info(),
            instructions: self.instructions.clone(),
            meta: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SERVER_NAME, SERVER_VERSION)
    }
}
