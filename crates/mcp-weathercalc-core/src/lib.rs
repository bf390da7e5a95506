pub mod arguments;
pub mod config;
pub mod error;
pub mod handler;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod status;
pub mod tools;
pub mod transports;

pub use arguments::{ArgValue, Arguments};
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use handler::{CoreHandler, self_test};
pub use protocol::*;
pub use tools::{ServerTools, ToolError, evaluate};
pub use transports::{StdioHandler, run_stdio_server};
