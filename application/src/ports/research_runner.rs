//! Research runner port — the failure boundary in front of the UI.
//!
//! [`ResearchRunner`] is the seam the request handler talks to: one task in,
//! either the final answer text or an [`ExecutionFailed`] out. Whatever goes
//! wrong underneath (provider errors, empty model output, transport
//! failures) arrives here already flattened to a message; a raw fault never
//! crosses this boundary.

use async_trait::async_trait;
use scout_domain::ResearchTask;

/// Terminal failure of one agent execution.
///
/// Carries only the human-readable message; the original error chain stays
/// below this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionFailed(pub String);

impl ExecutionFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExecutionFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ExecutionFailed {}

/// Port for running one research task to completion.
#[async_trait]
pub trait ResearchRunner: Send + Sync {
    /// Drive the task through the agent and return the final answer text.
    async fn run(&self, task: ResearchTask) -> Result<String, ExecutionFailed>;
}
