//! Model configuration from TOML (`[model]` section)

use scout_domain::{Model, ModelSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier (default: "llama-3.3-70b-versatile")
    pub name: String,
    /// Sampling temperature (default: 0.7)
    pub temperature: f32,
    /// Max tokens per response (default: 1024)
    pub max_output_tokens: u32,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }
}

impl FileModelConfig {
    /// Parse the configured model identifier into a domain [`Model`].
    pub fn to_model(&self) -> Model {
        self.name.parse().unwrap()
    }

    /// Convert the sampling parameters into domain [`ModelSettings`].
    pub fn to_settings(&self) -> ModelSettings {
        ModelSettings::default()
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
    }
}
