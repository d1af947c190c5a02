//! Researcher agent profile.
//!
//! [`ResearcherProfile`] is pure configuration: a role label, a goal, a
//! backstory biasing the agent toward selective tool use, the names of the
//! tools it may call, and the model it is bound to. It carries no execution
//! logic — whether and when the agent actually searches is decided by the
//! model per request, steered only by this text.
//!
//! The profile is constructed once at startup and shared read-only across
//! all requests.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Static configuration for the single answering agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearcherProfile {
    /// Role label (e.g. "Web Researcher").
    pub role: String,
    /// One-paragraph goal description.
    pub goal: String,
    /// One-paragraph persona text steering tool-use behavior.
    pub backstory: String,
    /// Names of the tools this agent may invoke.
    pub allowed_tools: Vec<String>,
    /// Model this agent is bound to.
    pub model: Model,
}

impl ResearcherProfile {
    /// The default web-researcher profile.
    ///
    /// The texts instruct the model to answer directly when confident and
    /// reach for search only when it needs current facts.
    pub fn web_researcher(model: Model) -> Self {
        Self {
            role: "Web Researcher".to_string(),
            goal: "Find accurate, up-to-date information from the web to answer questions"
                .to_string(),
            backstory: "You are a fast, skeptical researcher who loves finding primary sources \
                        and giving concise, factual answers. You only use the search tool when \
                        needed."
                .to_string(),
            allowed_tools: vec!["web_search".to_string()],
            model,
        }
    }

    /// Render the profile into the session system prompt.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {role}.\n\n{backstory}\n\nYour goal: {goal}",
            role = self.role,
            backstory = self.backstory,
            goal = self.goal,
        )
    }

    /// Check whether a tool name is allowed for this agent.
    pub fn allows_tool(&self, name: &str) -> bool {
        self.allowed_tools.iter().any(|t| t == name)
    }
}
