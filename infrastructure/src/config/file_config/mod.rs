//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types where
//! appropriate.

mod logging;
mod model;
mod providers;
mod server;

pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use providers::{FileGroqConfig, FileProvidersConfig};
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and sampling parameters
    pub model: FileModelConfig,
    /// Provider settings (Groq credentials and endpoint)
    pub providers: FileProvidersConfig,
    /// Web UI server settings
    pub server: FileServerConfig,
    /// Conversation transcript logging
    pub logging: FileLoggingConfig,
}
