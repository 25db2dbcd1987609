//! # Buddy bot
//!
//! Telegram chat bot: canned keyword replies, joke / quote / weather commands, and an optional
//! `/ask` backed by an OpenAI-compatible model. Core (Handler, Bot, Message) is transport-agnostic;
//! `telegram` binds it to teloxide.

pub mod assistant;
pub mod chain;
pub mod config;
pub mod core;
pub mod fetchers;
pub mod handlers;
pub mod mention;
pub mod responder;
pub mod runner;
pub mod telegram;

pub use core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Message,
    Result, ToCoreMessage, ToCoreUser, User,
};

pub use assistant::Assistant;
pub use chain::HandlerChain;
pub use config::BotConfig;
pub use fetchers::{ContentFetcher, FetcherEndpoints, HttpFetcher};
pub use handlers::{Intent, LoggingHandler, ReplyHandler, SmallTalk};
pub use runner::{build_assistant, build_handler_chain, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter};
