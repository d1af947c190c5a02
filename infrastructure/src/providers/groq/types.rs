//! Wire types for the OpenAI-compatible chat-completions API
//!
//! Conversions between the provider's JSON shapes and the domain
//! [`LlmResponse`]. Tool arguments arrive as a JSON-encoded string and are
//! decoded into structured input here.

use scout_application::ports::llm_gateway::ToolResultMessage;
use scout_domain::{ContentBlock, LlmResponse, StopReason};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A role-tagged message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// A tool result, correlated to the call via `tool_call_id`.
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

/// A tool call block in an assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

/// The function name/arguments pair inside a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded arguments object.
    pub arguments: String,
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<&'a [serde_json::Value]>,
}

/// Response body for `POST /chat/completions`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Map the provider's `finish_reason` onto the domain [`StopReason`].
pub fn convert_finish_reason(reason: Option<&str>) -> Option<StopReason> {
    reason.map(|r| match r {
        "stop" => StopReason::EndTurn,
        "tool_calls" => StopReason::ToolUse,
        "length" => StopReason::MaxTokens,
        other => StopReason::Other(other.to_string()),
    })
}

/// Decode a tool call's JSON-encoded argument string.
///
/// Malformed arguments become an empty map — the downstream validator will
/// reject the call with a message the model can act on.
fn decode_arguments(arguments: &str) -> HashMap<String, serde_json::Value> {
    serde_json::from_str(arguments).unwrap_or_default()
}

/// Convert one response choice into the domain [`LlmResponse`].
pub fn convert_choice(choice: &Choice, model: Option<String>) -> LlmResponse {
    let mut content = Vec::new();

    if let Some(ref text) = choice.message.content
        && !text.is_empty()
    {
        content.push(ContentBlock::Text(text.clone()));
    }

    if let Some(ref calls) = choice.message.tool_calls {
        for call in calls {
            content.push(ContentBlock::ToolUse {
                id: call.id.clone(),
                name: call.function.name.clone(),
                input: decode_arguments(&call.function.arguments),
            });
        }
    }

    LlmResponse {
        content,
        stop_reason: convert_finish_reason(choice.finish_reason.as_deref()),
        model,
    }
}

/// Wrap a provider-neutral tool schema (`{name, description, input_schema}`)
/// into the OpenAI function declaration format.
pub fn convert_tool_schema(schema: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": schema["name"],
            "description": schema["description"],
            "parameters": schema["input_schema"],
        }
    })
}

/// Convert a tool result into the `tool` role message the API expects.
///
/// The API has no error flag on tool messages, so failures are prefixed in
/// the content for the model to see.
pub fn convert_tool_result(result: &ToolResultMessage) -> ChatMessage {
    let content = if result.is_error {
        format!("ERROR: {}", result.output)
    } else {
        result.output.clone()
    };
    ChatMessage::tool(result.tool_use_id.as_str(), content)
}
