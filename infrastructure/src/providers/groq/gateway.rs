//! Groq gateway — creates sessions against the chat-completions API.

use super::session::GroqSession;
use crate::config::credentials::ApiKey;
use crate::config::file_config::FileGroqConfig;
use async_trait::async_trait;
use scout_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use scout_domain::{Model, ModelSettings};
use std::time::Duration;
use tracing::info;

/// [`LlmGateway`] implementation backed by Groq's OpenAI-compatible API.
///
/// Holds the shared HTTP client, endpoint, credential, and generation
/// settings; each request gets its own ephemeral [`GroqSession`].
pub struct GroqLlmGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
    settings: ModelSettings,
}

impl GroqLlmGateway {
    pub fn new(
        config: &FileGroqConfig,
        api_key: ApiKey,
        settings: ModelSettings,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(base_url = %config.base_url, "Groq gateway initialized");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            settings,
        })
    }

    fn create_groq_session(&self, model: &Model, system_prompt: Option<String>) -> GroqSession {
        GroqSession::new(
            self.client.clone(),
            self.base_url.clone(),
            self.api_key.clone(),
            model.clone(),
            self.settings.clone(),
            system_prompt,
        )
    }
}

#[async_trait]
impl LlmGateway for GroqLlmGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(self.create_groq_session(model, None)))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(
            self.create_groq_session(model, Some(system_prompt.to_string())),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gateway_creates_sessions() {
        let gateway = GroqLlmGateway::new(
            &FileGroqConfig::default(),
            ApiKey::new("gsk_test").unwrap(),
            ModelSettings::default(),
        )
        .unwrap();

        let session = gateway
            .create_session_with_system_prompt(&Model::default(), "You are a researcher.")
            .await
            .unwrap();

        assert_eq!(session.model(), &Model::Llama33_70bVersatile);
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = FileGroqConfig {
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            ..Default::default()
        };
        let gateway = GroqLlmGateway::new(
            &config,
            ApiKey::new("gsk_test").unwrap(),
            ModelSettings::default(),
        )
        .unwrap();

        assert_eq!(gateway.base_url, "https://api.groq.com/openai/v1");
    }
}
