//! Presentation layer for scout
//!
//! This crate contains the user-facing surfaces: the clap CLI definition
//! and the axum web form UI.

pub mod cli;
pub mod web;

// Re-export commonly used types
pub use cli::Cli;
pub use web::serve;
