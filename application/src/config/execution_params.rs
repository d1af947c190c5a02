//! Execution parameters — use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound the tool-use
//! loop in [`RunResearchUseCase`](crate::use_cases::run_research::RunResearchUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Execution loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum tool-use turns in a single research run.
    pub max_tool_turns: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self { max_tool_turns: 10 }
    }
}

impl ExecutionParams {
    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }
}
