//! Telegram binding: adapters, Bot implementation, polling runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{message_text, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{parse_message_id, TelegramBotAdapter};
pub use runner::run_repl;
