//! Provider configuration from TOML (`[providers]` section)

use crate::config::credentials::ApiKey;
use serde::{Deserialize, Serialize};

/// Groq API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl FileGroqConfig {
    /// Resolve the API key: the explicit config value wins, then the
    /// configured environment variable. Returns `None` if neither yields a
    /// non-blank key.
    pub fn resolve_api_key(&self) -> Option<ApiKey> {
        if let Some(ref key) = self.api_key
            && let Some(key) = ApiKey::new(key.clone())
        {
            return Some(key);
        }
        std::env::var(&self.api_key_env).ok().and_then(ApiKey::new)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Groq API settings.
    pub groq: FileGroqConfig,
}
