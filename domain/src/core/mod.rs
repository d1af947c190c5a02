//! Core domain types: models and questions

pub mod model;
pub mod question;
