//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Tests substitute another Bot impl.

use crate::core::{Bot as CoreBot, BotError, Chat, Message, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, MessageId, ReactionType, ReplyParameters};

/// Parses a core message id back into a Telegram message id.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id: {}", s)))
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.bot
            .send_message(ChatId(message.chat.id), text)
            .reply_parameters(ReplyParameters::new(MessageId(id)))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Telegram keeps one reaction per bot per message, so a later call replaces an earlier one.
    async fn react(&self, message: &Message, emoji: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.bot
            .set_message_reaction(ChatId(message.chat.id), MessageId(id))
            .reaction(vec![ReactionType::Emoji {
                emoji: emoji.to_string(),
            }])
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
