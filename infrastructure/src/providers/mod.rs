//! Model provider adapters

pub mod groq;

pub use groq::GroqLlmGateway;
