//! Bot configuration loaded from environment variables (after `.env` is applied with dotenvy).

use llm_client::EnvLlmConfig;
use std::env;

use crate::core::{BotError, Result};
use crate::fetchers::{FetcherEndpoints, DEFAULT_JOKE_URL, DEFAULT_QUOTE_URL, DEFAULT_WEATHER_URL};

const DEFAULT_LOG_FILE: &str = "logs/buddy-bot.log";

/// Everything the process needs: platform token, service keys and endpoints, logging.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// WEATHER_API_KEY (OpenWeatherMap); empty means every weather lookup falls back.
    pub weather_api_key: String,
    /// JOKE_API_URL / QUOTE_API_URL / WEATHER_API_URL
    pub endpoints: FetcherEndpoints,
    /// LOG_FILE
    pub log_file: String,
    /// `None` when GROQ_API_KEY is unset; `/ask` is then disabled.
    pub llm: Option<EnvLlmConfig>,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| BotError::Config("BOT_TOKEN not set".into()))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let weather_api_key = env::var("WEATHER_API_KEY").unwrap_or_default();
        let endpoints = FetcherEndpoints {
            joke_url: env_or("JOKE_API_URL", DEFAULT_JOKE_URL),
            quote_url: env_or("QUOTE_API_URL", DEFAULT_QUOTE_URL),
            weather_url: env_or("WEATHER_API_URL", DEFAULT_WEATHER_URL),
        };
        let log_file = env_or("LOG_FILE", DEFAULT_LOG_FILE);
        let llm = EnvLlmConfig::from_env().map_err(|e| BotError::Config(e.to_string()))?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            weather_api_key,
            endpoints,
            log_file,
            llm,
        })
    }

    /// Checks the token is non-blank and every URL parses. Call after load() to fail fast.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(BotError::Config("BOT_TOKEN is empty".into()));
        }
        let urls = [
            ("TELEGRAM_API_URL", self.telegram_api_url.as_deref()),
            ("JOKE_API_URL", Some(self.endpoints.joke_url.as_str())),
            ("QUOTE_API_URL", Some(self.endpoints.quote_url.as_str())),
            ("WEATHER_API_URL", Some(self.endpoints.weather_url.as_str())),
        ];
        for (name, url) in urls {
            if let Some(url) = url {
                if reqwest::Url::parse(url).is_err() {
                    return Err(BotError::Config(format!("{} is not a valid URL: {}", name, url)));
                }
            }
        }
        Ok(())
    }

    pub fn ask_enabled(&self) -> bool {
        self.llm.is_some()
    }
}
