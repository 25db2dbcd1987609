//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI-compatible implementation (used against Groq by
//! default). Transport-agnostic; the bot's `/ask` command goes through this trait so tests can
//! substitute a stub.

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_llm::{OpenAILlmClient, DEFAULT_SYSTEM_PROMPT};

/// Role of a chat message sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    System,
    User,
}

/// One message of a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Errors from a completion request. `RateLimited` is kept apart so callers can word the
/// user-facing reply differently.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// LLM client interface: request a completion for a list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages. Implementations prepend their system prompt.
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError>;
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 bytes or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

/// Error codes / types providers use for throttling and exhausted quota.
const RATE_LIMIT_CODES: &[&str] = &["rate_limit_exceeded", "insufficient_quota"];

/// Decides whether a failed completion was a rate-limit or quota rejection.
///
/// Any one signal is enough: HTTP 429, a known `code` or `type`, or a message mentioning
/// "rate limit".
pub fn is_rate_limit(
    status: Option<u16>,
    code: Option<&str>,
    kind: Option<&str>,
    message: &str,
) -> bool {
    if status == Some(429) {
        return true;
    }
    let known = |s: Option<&str>| s.is_some_and(|s| RATE_LIMIT_CODES.contains(&s));
    if known(code) || known(kind) {
        return true;
    }
    message.to_lowercase().contains("rate limit")
}

/// `{"error": {...}}` envelope returned by OpenAI-compatible APIs on failure.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    /// Providers send a string, a number or null.
    code: Option<serde_json::Value>,
}

/// Maps a non-2xx completion response onto [`LlmError`]. The status alone is enough for a
/// rate limit; the body only adds detail and may be missing or not JSON.
pub(crate) fn classify_http_error(status: StatusCode, body: &str) -> LlmError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let message = parsed
        .as_ref()
        .map(|e| e.message.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status));
    let code = parsed
        .as_ref()
        .and_then(|e| e.code.as_ref())
        .and_then(|c| c.as_str());
    let kind = parsed.as_ref().and_then(|e| e.kind.as_deref());

    if is_rate_limit(Some(status.as_u16()), code, kind, &message) {
        LlmError::RateLimited(message)
    } else {
        LlmError::Api(message)
    }
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
pub(crate) fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, LlmError> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?
            .into(),
    };
    Ok(openai_msg)
}
