//! Handlers: message logging and the reply dispatcher.

pub mod dispatch;
mod logging_handler;
mod reply_handler;

pub use dispatch::{classify_message, classify_text, Intent, SmallTalk};
pub use logging_handler::LoggingHandler;
pub use reply_handler::ReplyHandler;
