//! Tool implementations for the agent
//!
//! This module provides the concrete tools the researcher agent can invoke.
//! The default specification contains exactly one tool: `web_search`.

pub mod web;

mod executor;
mod schema;

pub use executor::LocalToolExecutor;
pub use schema::JsonSchemaToolConverter;

use scout_domain::tool::entities::ToolSpec;

/// Create the default tool specification with all available tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new().register(web::web_search_definition())
}
