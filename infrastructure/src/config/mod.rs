//! Configuration loading: raw TOML structs, credentials, and the loader

pub mod credentials;
pub mod file_config;
pub mod loader;

pub use credentials::ApiKey;
pub use file_config::{
    FileConfig, FileGroqConfig, FileLoggingConfig, FileModelConfig, FileProvidersConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
