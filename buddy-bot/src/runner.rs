//! Process wiring: builds the handler chain from config and runs the Telegram loop.

use anyhow::Result;
use llm_client::OpenAILlmClient;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::assistant::Assistant;
use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::fetchers::{ContentFetcher, HttpFetcher};
use crate::handlers::{LoggingHandler, ReplyHandler};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Builds the assistant when an LLM is configured.
pub fn build_assistant(config: &BotConfig) -> Option<Assistant> {
    config
        .llm
        .as_ref()
        .map(|llm| Assistant::new(Arc::new(OpenAILlmClient::from_config(llm))))
}

/// Logging → reply. Collaborators are passed in so tests can inject mocks.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    fetcher: Arc<dyn ContentFetcher>,
    assistant: Option<Assistant>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handler(Arc::new(ReplyHandler::new(bot, fetcher, assistant, bot_username)))
}

/// Main entry: validate config, init logging, wire components, then poll until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    if config.weather_api_key.is_empty() {
        warn!("WEATHER_API_KEY not set; /weather will always reply with the fallback");
    }
    info!(
        ask_enabled = config.ask_enabled(),
        log_file = %config.log_file,
        "Initializing bot"
    );

    let mut teloxide_bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(url) = config.telegram_api_url.as_deref() {
        teloxide_bot = teloxide_bot.set_api_url(reqwest::Url::parse(url)?);
    }

    let bot_username = Arc::new(RwLock::new(None));
    let chain = build_handler_chain(
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        Arc::new(HttpFetcher::new(
            config.endpoints.clone(),
            config.weather_api_key.clone(),
        )),
        build_assistant(&config),
        bot_username.clone(),
    );

    run_repl(teloxide_bot, chain, bot_username).await
}
