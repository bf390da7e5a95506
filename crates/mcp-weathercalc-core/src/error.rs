use rust_mcp_schema::RpcError;
use thiserror::Error;

/// Failures surfaced as protocol-level faults or raised by the server runtime
#[derive(Debug, Error)]
pub enum Error {
    /// A resources/read request named a URI that is not in the catalog
    #[error("Unknown resource URI: {uri}")]
    UnknownResource { uri: String },

    /// A prompts/get request named a prompt that is not in the catalog
    #[error("Unknown prompt: {name}")]
    UnknownPrompt { name: String },

    /// Transport layer errors
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn unknown_resource<S: Into<String>>(uri: S) -> Self {
        Self::UnknownResource { uri: uri.into() }
    }

    pub fn unknown_prompt<S: Into<String>>(name: S) -> Self {
        Self::UnknownPrompt { name: name.into() }
    }

    /// Create a new transport error with context
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// True for lookups of identifiers the caller should not have sent
    pub fn is_invalid_params(&self) -> bool {
        matches!(self, Self::UnknownResource { .. } | Self::UnknownPrompt { .. })
    }
}

impl From<Error> for RpcError {
    fn from(err: Error) -> Self {
        if err.is_invalid_params() {
            RpcError::invalid_params().with_message(err.to_string())
        } else {
            RpcError::internal_error().with_message(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
