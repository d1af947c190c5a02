//! Groq LLM session implementation
//!
//! Wraps the OpenAI-compatible chat-completions API to implement the
//! `LlmSession` trait. The API is stateless, so the session keeps the
//! conversation history locally and sends the full history on each call.

use super::types;
use crate::config::credentials::ApiKey;
use async_trait::async_trait;
use scout_application::ports::llm_gateway::{GatewayError, LlmSession, ToolResultMessage};
use scout_domain::{LlmResponse, Model, ModelSettings};
use tokio::sync::Mutex;
use tracing::debug;

pub struct GroqSession {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
    model: Model,
    settings: ModelSettings,
    /// Conversation history (stateless API requires full history each call)
    messages: Mutex<Vec<types::ChatMessage>>,
    /// Function declarations (set when send_with_tools is first called)
    tools: Mutex<Option<Vec<serde_json::Value>>>,
}

impl GroqSession {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        api_key: ApiKey,
        model: Model,
        settings: ModelSettings,
        system_prompt: Option<String>,
    ) -> Self {
        let mut messages = Vec::new();
        if let Some(prompt) = system_prompt
            && !prompt.is_empty()
        {
            messages.push(types::ChatMessage::system(prompt));
        }

        Self {
            client,
            base_url,
            api_key,
            model,
            settings,
            messages: Mutex::new(messages),
            tools: Mutex::new(None),
        }
    }

    /// Execute one chat-completions call with the current history.
    async fn chat(
        &self,
        messages: &[types::ChatMessage],
    ) -> Result<types::ChatCompletionResponse, GatewayError> {
        let tools = self.tools.lock().await;

        let request = types::ChatCompletionRequest {
            model: self.model.as_str(),
            messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_output_tokens,
            tools: tools.as_deref(),
        };

        debug!(
            model = %self.model,
            messages = messages.len(),
            "Calling chat completions API"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = scout_domain::util::truncate_str(&body, 500);
            return Err(match status.as_u16() {
                404 => GatewayError::ModelNotAvailable(format!(
                    "{} ({})",
                    self.model, body
                )),
                _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, body)),
            });
        }

        response
            .json::<types::ChatCompletionResponse>()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed response: {}", e)))
    }

    /// Append messages to the history, call the API, and record the
    /// assistant's reply in the history.
    async fn roundtrip(
        &self,
        new_messages: Vec<types::ChatMessage>,
    ) -> Result<LlmResponse, GatewayError> {
        let mut messages = self.messages.lock().await;
        messages.extend(new_messages);

        let response = self.chat(&messages).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::RequestFailed("No choices in response".to_string()))?;

        messages.push(choice.message.clone());

        Ok(types::convert_choice(&choice, response.model))
    }
}

#[async_trait]
impl LlmSession for GroqSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let response = self
            .roundtrip(vec![types::ChatMessage::user(content)])
            .await?;
        Ok(response.text_content())
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        if !tools.is_empty() {
            let declarations: Vec<serde_json::Value> =
                tools.iter().map(types::convert_tool_schema).collect();
            *self.tools.lock().await = Some(declarations);
        }

        self.roundtrip(vec![types::ChatMessage::user(content)]).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        let messages: Vec<types::ChatMessage> =
            results.iter().map(types::convert_tool_result).collect();

        self.roundtrip(messages).await
    }
}
