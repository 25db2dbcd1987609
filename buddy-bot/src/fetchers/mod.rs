//! Outbound content services (joke, quote, weather).
//!
//! Every [`ContentFetcher`] method returns a displayable string and never fails: any network
//! error, non-2xx status or malformed body is logged and replaced by that method's fallback.

mod joke;
mod quote;
mod weather;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{instrument, warn};

pub use joke::FALLBACK_JOKE;
pub use quote::FALLBACK_QUOTE;
pub use weather::weather_fallback;

pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Failure of a single upstream call. Never leaves this module.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Source of joke / quote / weather text for the command handlers.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// `"<setup> - <punchline>"`, or [`FALLBACK_JOKE`].
    async fn joke(&self) -> String;
    /// `"<content> — <author>"`, or [`FALLBACK_QUOTE`].
    async fn quote(&self) -> String;
    /// Three-line summary for `city` (non-empty; callers check), or [`weather_fallback`].
    async fn weather(&self, city: &str) -> String;
}

/// Service URLs; overridable for self-hosted mirrors and tests.
#[derive(Debug, Clone)]
pub struct FetcherEndpoints {
    pub joke_url: String,
    pub quote_url: String,
    pub weather_url: String,
}

impl Default for FetcherEndpoints {
    fn default() -> Self {
        Self {
            joke_url: DEFAULT_JOKE_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

/// [`ContentFetcher`] over HTTP with a shared reqwest client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoints: FetcherEndpoints,
    weather_api_key: String,
}

impl HttpFetcher {
    pub fn new(endpoints: FetcherEndpoints, weather_api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
            weather_api_key: weather_api_key.into(),
        }
    }

    /// GET `url` with `query`, require 2xx, decode JSON into `T`.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn joke(&self) -> String {
        self.try_joke().await.unwrap_or_else(|e| {
            warn!(error = %e, "joke fetch failed, using fallback");
            FALLBACK_JOKE.to_string()
        })
    }

    #[instrument(skip(self))]
    async fn quote(&self) -> String {
        self.try_quote().await.unwrap_or_else(|e| {
            warn!(error = %e, "quote fetch failed, using fallback");
            FALLBACK_QUOTE.to_string()
        })
    }

    #[instrument(skip(self))]
    async fn weather(&self, city: &str) -> String {
        self.try_weather(city).await.unwrap_or_else(|e| {
            warn!(error = %e, city = %city, "weather fetch failed, using fallback");
            weather_fallback(city)
        })
    }
}
