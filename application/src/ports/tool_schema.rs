//! Tool schema conversion port.
//!
//! Separates "which tools the agent may use" (domain) from "how to serialize
//! them for the provider API" (infrastructure). The domain layer defines
//! [`ToolDefinition`] and [`ToolSpec`] with filtering; this port handles the
//! JSON Schema conversion the provider requires.

use scout_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to provider API format (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to provider-neutral JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a JSON Schema array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;

    /// Convert only the tools in an agent's allowed list (sorted by name).
    fn allowed_tools_schema(
        &self,
        spec: &ToolSpec,
        allowed_names: &[String],
    ) -> Vec<serde_json::Value>;
}
