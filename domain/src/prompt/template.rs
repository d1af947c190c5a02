//! Prompt template for the research task

use crate::core::question::Question;

/// Template for the single research task handed to the agent
pub struct TaskTemplate;

impl TaskTemplate {
    /// Expected output shape, stated as a human-readable constraint
    pub const EXPECTED_OUTPUT: &'static str =
        "A clear, concise answer in 3-8 sentences max + sources if used.";

    /// Instruction text for a question
    ///
    /// The question is embedded verbatim; callers rely on substring
    /// containment holding for any valid question.
    pub fn instructions(question: &Question) -> String {
        format!(
            r#"Research and answer the following question as factually and concisely as possible:

QUESTION: {}

Use web search only when necessary. Cite key sources briefly when you do. If you're very confident without searching, just answer directly."#,
            question.content()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_embed_question() {
        let question = Question::new("What was the score of the last Bangladesh vs India cricket match?");
        let prompt = TaskTemplate::instructions(&question);
        assert!(prompt.contains(question.content()));
    }

    #[test]
    fn test_instructions_bias_against_searching() {
        let question = Question::new("What is 2+2?");
        let prompt = TaskTemplate::instructions(&question);
        assert!(prompt.contains("only when necessary"));
        assert!(prompt.contains("answer directly"));
    }

    #[test]
    fn test_expected_output_is_sentence_bounded() {
        assert!(TaskTemplate::EXPECTED_OUTPUT.contains("3-8 sentences"));
    }
}
