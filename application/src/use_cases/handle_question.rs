//! Handle Question use case.
//!
//! The UI-facing entry point: validates the raw input, builds the research
//! task, and runs it through the [`ResearchRunner`] port. The return type is
//! always a plain string — blank input gets the fixed prompt message,
//! failures get the `Error: ` prefix, and a successful answer passes through
//! unchanged.
//!
//! Stateless: the only thing shared across concurrent invocations is the
//! read-only researcher profile.

use crate::ports::research_runner::ResearchRunner;
use scout_domain::{Question, ResearchTask, ResearcherProfile};
use std::sync::Arc;
use tracing::debug;

/// Message returned for blank or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a question.";

/// Use case handling one incoming question end-to-end.
#[derive(Clone)]
pub struct HandleQuestionUseCase {
    profile: Arc<ResearcherProfile>,
    runner: Arc<dyn ResearchRunner>,
}

impl HandleQuestionUseCase {
    pub fn new(profile: Arc<ResearcherProfile>, runner: Arc<dyn ResearchRunner>) -> Self {
        Self { profile, runner }
    }

    /// Handle one raw question and produce the user-visible output.
    ///
    /// Blank input short-circuits before anything downstream runs — this is
    /// the sole guard condition in the system.
    pub async fn handle(&self, raw_question: &str) -> String {
        let Some(question) = Question::try_new(raw_question) else {
            debug!("Rejected blank question");
            return EMPTY_INPUT_MESSAGE.to_string();
        };

        let task = ResearchTask::for_question(&question, (*self.profile).clone());

        match self.runner.run(task).await {
            Ok(answer) => answer,
            Err(failure) => format!("Error: {}", failure.message()),
        }
    }
}
