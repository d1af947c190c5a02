//! Groq provider
//!
//! Implements the [`LlmGateway`](scout_application::ports::llm_gateway::LlmGateway)
//! port against Groq's OpenAI-compatible `chat/completions` API. The API is
//! stateless, so each session keeps the conversation history locally and
//! replays it on every call.

mod gateway;
mod session;
mod types;

pub use gateway::GroqLlmGateway;
pub use session::GroqSession;
