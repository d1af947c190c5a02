//! LLM Gateway port
//!
//! The contract for the external reasoning engine. The application layer
//! never looks behind it: a session is created with a system prompt, a
//! message goes in with tool declarations, and a structured response comes
//! out. How many internal model calls that takes is the provider's business.

use async_trait::async_trait;
use scout_domain::{LlmResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the model
/// provider. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with the specified model
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// A tool result sent back to the model during the tool-use loop.
#[derive(Debug, Clone)]
pub struct ToolResultMessage {
    /// The provider-assigned ID of the tool call this result answers.
    pub tool_use_id: String,
    /// Canonical tool name.
    pub tool_name: String,
    /// Tool output, or the error message on failure.
    pub output: String,
    /// Whether the tool execution failed.
    pub is_error: bool,
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get a plain text response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Send a message with tool declarations and get a structured response
    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError>;

    /// Send tool results back and get the model's next response
    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError>;
}
