// Re-export the rust-mcp-schema types that make up this server's surface
pub use rust_mcp_schema::{
    // Tools
    CallToolRequest,
    CallToolRequestParams,
    CallToolResult,
    CallToolResultContentItem,
    ListToolsRequest,
    ListToolsResult,
    TextContent,
    Tool,

    // Resources
    ListResourcesRequest,
    ListResourcesRequestParams,
    ListResourcesResult,
    ReadResourceRequest,
    ReadResourceRequestParams,
    ReadResourceResult,
    ReadResourceResultContentsItem,
    Resource,
    TextResourceContents,

    // Prompts
    GetPromptRequest,
    GetPromptRequestParams,
    GetPromptResult,
    ListPromptsRequest,
    ListPromptsRequestParams,
    ListPromptsResult,
    Prompt,
    PromptMessageContent,

    // Initialization
    Implementation,
    InitializeResult,
    ServerCapabilities,

    // Error types
    RpcError,
    schema_utils::CallToolError,
};

// Constants
pub const PROTOCOL_VERSION: &str = "2025-03-26";
