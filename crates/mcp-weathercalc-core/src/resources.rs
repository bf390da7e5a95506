use rust_mcp_schema::{ReadResourceResultContentsItem, Resource, TextResourceContents};

use crate::error::{Error, Result};
use crate::status::SystemStatus;

pub const KNOWLEDGE_BASE_URI: &str = "resource://knowledge-base/articles";
pub const SYSTEM_STATUS_URI: &str = "resource://system/status";

const KNOWLEDGE_BASE: &str = "\
# Knowledge Base

## Frequently Asked Questions

### Q: What does this MCP server do?
A: It provides weather lookups and a calculator.

### Q: Which calculations are supported?
A: Basic arithmetic on two operands (+, -, *, /).

### Q: Is the weather data real-time?
A: No. It currently returns mock data for demonstration.

## Usage

1. `weather` tool: pass a location and units to get the weather
2. `calculator` tool: pass an expression to evaluate it

## Troubleshooting

- If a calculation fails, check the format of the expression
- Unsupported operators cannot be used
";

/// Static resources exposed by the server, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerResource {
    KnowledgeBase,
    SystemStatus,
}

impl ServerResource {
    pub const ALL: [ServerResource; 2] = [ServerResource::KnowledgeBase, ServerResource::SystemStatus];

    pub fn from_uri(uri: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.uri() == uri)
            .ok_or_else(|| Error::unknown_resource(uri))
    }

    pub fn uri(self) -> &'static str {
        match self {
            ServerResource::KnowledgeBase => KNOWLEDGE_BASE_URI,
            ServerResource::SystemStatus => SYSTEM_STATUS_URI,
        }
    }

    pub fn descriptor(self) -> Resource {
        let (name, description, mime_type) = match self {
            ServerResource::KnowledgeBase => (
                "Knowledge base articles",
                "Collection of support articles and documentation",
                "text/markdown",
            ),
            ServerResource::SystemStatus => (
                "System status",
                "Current operational status of the system",
                "application/json",
            ),
        };
        Resource {
            annotations: None,
            description: Some(description.to_string()),
            mime_type: Some(mime_type.to_string()),
            name: name.to_string(),
            size: None,
            uri: self.uri().to_string(),
        }
    }

    pub fn read(self) -> Result<ReadResourceResultContentsItem> {
        let (text, mime_type) = match self {
            ServerResource::KnowledgeBase => (KNOWLEDGE_BASE.to_string(), None),
            ServerResource::SystemStatus => (
                SystemStatus::current().to_json()?,
                Some("application/json".to_string()),
            ),
        };
        Ok(ReadResourceResultContentsItem::TextResourceContents(
            TextResourceContents {
                mime_type,
                text,
                uri: self.uri().to_string(),
            },
        ))
    }
}

pub fn resources() -> Vec<Resource> {
    ServerResource::ALL.into_iter().map(ServerResource::descriptor).collect()
}
