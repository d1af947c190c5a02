//! Prompt templates for the research flow

pub mod template;

pub use template::TaskTemplate;
