//! LLM session response types

pub mod response;

pub use response::{ContentBlock, LlmResponse, StopReason};
