//! Model generation settings.
//!
//! [`ModelSettings`] groups the static sampling parameters handed to the
//! model provider. This is a value object — once created, settings don't
//! change at runtime.

use serde::{Deserialize, Serialize};

/// Static generation parameters for the model provider.
///
/// # Example
///
/// ```
/// use scout_domain::agent::model_settings::ModelSettings;
///
/// let settings = ModelSettings::default().with_temperature(0.2);
/// assert_eq!(settings.temperature, 0.2);
/// assert_eq!(settings.max_output_tokens, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens per response.
    pub max_output_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }
}

impl ModelSettings {
    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}
