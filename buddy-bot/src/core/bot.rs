//! Bot abstraction: the one long-lived connection handlers talk through.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `crate::telegram`.

use crate::core::error::Result;
use crate::core::types::{Chat, Message};
use async_trait::async_trait;

/// Outbound operations on the chat platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` as a reply to `message` (same chat, quoted).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Attaches an emoji reaction to `message`. Callers treat failures as best-effort.
    async fn react(&self, message: &Message, emoji: &str) -> Result<()>;
    /// Shows the "typing" indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
