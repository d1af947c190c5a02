//! Application layer for scout
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage},
    research_runner::{ExecutionFailed, ResearchRunner},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::handle_question::{HandleQuestionUseCase, EMPTY_INPUT_MESSAGE};
pub use use_cases::run_research::{RunResearchError, RunResearchUseCase};
