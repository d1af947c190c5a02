//! Infrastructure layer for scout
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Groq chat-completions gateway, the local tool
//! executor with the DuckDuckGo `web_search` tool, configuration file
//! loading, and the JSONL conversation logger.

pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigLoader, FileConfig, FileGroqConfig, FileLoggingConfig, FileModelConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::groq::GroqLlmGateway;
pub use tools::{default_tool_spec, JsonSchemaToolConverter, LocalToolExecutor};
