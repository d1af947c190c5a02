//! Web tools — outbound network capabilities for the agent

pub mod search;

pub use search::{execute_web_search, web_search_definition, WEB_SEARCH};
