//! Research task — the single unit of work handed to the agent.

use crate::agent::profile::ResearcherProfile;
use crate::core::question::Question;
use crate::prompt::TaskTemplate;
use serde::{Deserialize, Serialize};

/// One unit of work: instructions, expected output shape, and the agent
/// assigned to it.
///
/// Built per request, immutable, consumed by exactly one orchestrator run
/// and discarded afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchTask {
    /// Full instruction text, with the question embedded verbatim.
    pub description: String,
    /// Human-readable constraint on the answer shape.
    pub expected_output: String,
    /// The agent that will execute this task.
    pub agent: ResearcherProfile,
}

impl ResearchTask {
    /// Build the research task for a question.
    ///
    /// Deterministic template expansion — no validation happens here; the
    /// question was already checked at construction.
    pub fn for_question(question: &Question, agent: ResearcherProfile) -> Self {
        Self {
            description: TaskTemplate::instructions(question),
            expected_output: TaskTemplate::EXPECTED_OUTPUT.to_string(),
            agent,
        }
    }

    /// Render the task into the user message sent to the model.
    pub fn to_message(&self) -> String {
        format!(
            "{}\n\nExpected output: {}",
            self.description, self.expected_output
        )
    }
}
