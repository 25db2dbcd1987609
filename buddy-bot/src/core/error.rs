//! Error types for the bot core.
//!
//! [`BotError`] is the only error type; handlers absorb upstream failures into replies and
//! surface only transport and startup errors.

use thiserror::Error;

/// Top-level error (bot transport, config).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
