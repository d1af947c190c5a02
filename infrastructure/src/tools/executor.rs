//! Local tool executor — the concrete implementation of [`ToolExecutorPort`].
//!
//! [`LocalToolExecutor`] bridges the application layer's abstract
//! [`ToolExecutorPort`] with the actual tool implementations. Every built-in
//! tool here is a web tool executed through a shared `reqwest::Client`
//! (30 s timeout); calls are validated against their definitions before
//! dispatch, and every failure is returned as a failed [`ToolResult`] rather
//! than an error — the model decides what to do with it.

use async_trait::async_trait;
use scout_application::ports::tool_executor::ToolExecutorPort;
use scout_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};

use super::web;

/// Executor that runs the agent's tools.
///
/// | Constructor | Tools |
/// |-------------|-------|
/// | [`new()`](Self::new) | Default spec (`web_search`) |
/// | [`with_tools()`](Self::with_tools) | Custom [`ToolSpec`] (tests) |
#[derive(Debug, Clone)]
pub struct LocalToolExecutor {
    /// Available tools
    tool_spec: ToolSpec,
    /// Shared HTTP client for web tools
    http_client: reqwest::Client,
}

impl LocalToolExecutor {
    /// Create a new executor with the default tool specification.
    pub fn new() -> Self {
        Self::with_tools(super::default_tool_spec())
    }

    /// Create an executor with a custom tool spec
    pub fn with_tools(tool_spec: ToolSpec) -> Self {
        Self {
            tool_spec,
            http_client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Validate a call against its definition, then dispatch it.
    async fn dispatch(&self, call: &ToolCall) -> ToolResult {
        let definition = match self.tool_spec.get(&call.tool_name) {
            Some(d) => d,
            None => {
                return ToolResult::failure(
                    &call.tool_name,
                    ToolError::not_found(format!("Unknown tool: {}", call.tool_name)),
                );
            }
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e));
        }

        match call.tool_name.as_str() {
            web::WEB_SEARCH => web::execute_web_search(&self.http_client, call).await,
            _ => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(format!(
                    "Tool '{}' is not implemented",
                    call.tool_name
                )),
            ),
        }
    }
}

impl Default for LocalToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for LocalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.dispatch(call).await
    }
}
