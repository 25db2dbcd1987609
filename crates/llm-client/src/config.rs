//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_MAX_TOKENS: u32 = 60;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn max_tokens(&self) -> u32;
    fn temperature(&self) -> f32;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn model(&self) -> &str {
        &self.model
    }
    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
    fn temperature(&self) -> f32 {
        self.temperature
    }
    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables. Returns `Ok(None)` when `GROQ_API_KEY` is unset or blank,
    /// which leaves the assistant disabled.
    pub fn from_env() -> Result<Option<Self>> {
        let api_key = match env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Ok(None),
        };
        let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_tokens = match env::var("LLM_MAX_TOKENS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("LLM_MAX_TOKENS is not a positive integer: {}", s))?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };
        let temperature = match env::var("LLM_TEMPERATURE") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("LLM_TEMPERATURE is not a number: {}", s))?,
            Err(_) => DEFAULT_TEMPERATURE,
        };
        let system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Some(Self {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            system_prompt,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "GROQ_API_KEY",
            "LLM_BASE_URL",
            "LLM_MODEL",
            "LLM_MAX_TOKENS",
            "LLM_TEMPERATURE",
            "LLM_SYSTEM_PROMPT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_missing_key_disables_llm() {
        clear_env();
        assert!(EnvLlmConfig::from_env().unwrap().is_none());

        env::set_var("GROQ_API_KEY", "   ");
        assert!(EnvLlmConfig::from_env().unwrap().is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("GROQ_API_KEY", "gsk_test");

        let config = EnvLlmConfig::from_env().unwrap().unwrap();
        assert_eq!(config.api_key(), "gsk_test");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.max_tokens(), 60);
        assert!(config.system_prompt().is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_max_tokens_is_an_error() {
        clear_env();
        env::set_var("GROQ_API_KEY", "gsk_test");
        env::set_var("LLM_MAX_TOKENS", "lots");

        assert!(EnvLlmConfig::from_env().is_err());
        clear_env();
    }
}
