//! OpenAI-compatible [`LlmClient`]: async-openai request/response types sent over reqwest, so the
//! HTTP status of a failure is kept for rate-limit detection.

use async_openai::types::{
    ChatCompletionRequestMessage, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::{chat_message_to_openai, classify_http_error, mask_token, ChatMessage, LlmClient, LlmError};
use crate::config::LlmConfig;

/// Default system prompt: keep answers chat-sized.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that replies in 1 or 2 short lines.";

/// Chat-completions client. Each request is sent exactly once.
#[derive(Clone)]
pub struct OpenAILlmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: crate::config::DEFAULT_MODEL.to_string(),
            max_tokens: crate::config::DEFAULT_MAX_TOKENS,
            temperature: crate::config::DEFAULT_TEMPERATURE,
            system_prompt: None,
        }
    }

    /// Builds a client from any [`LlmConfig`].
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
            .with_max_tokens(config.max_tokens())
            .with_temperature(config.temperature())
            .with_system_prompt_opt(config.system_prompt().map(str::to_string))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn system_content(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// System prompt first, then the caller's messages.
    fn build_messages(
        &self,
        messages: &[ChatMessage],
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        std::iter::once(ChatMessage::system(self.system_content()))
            .chain(messages.iter().cloned())
            .map(|msg| chat_message_to_openai(&msg))
            .collect()
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        let openai_messages = self.build_messages(&messages)?;

        info!(
            model = %self.model,
            message_count = openai_messages.len(),
            max_tokens = self.max_tokens,
            api_key = %mask_token(&self.api_key),
            "chat_completion request"
        );

        #[allow(deprecated)]
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(openai_messages)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Request(format!("completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_http_error(status, &body);
            warn!(status = status.as_u16(), error = %err, "chat_completion failed");
            return Err(err);
        }

        let completion: CreateChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Request(format!("failed to parse completion: {}", e)))?;

        if let Some(ref u) = completion.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
