//! Teloxide → core type conversion.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Converts a Telegram user to a core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Converts a Telegram message to a core [`Message`]. Messages without a sender (channel posts)
/// get an anonymous non-bot user. Media messages use their caption as content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                    is_bot: false,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: message_text(self.0).unwrap_or_default().to_string(),
        }
    }
}

/// Text of a message, falling back to a media caption. `None` when there is neither.
pub fn message_text(msg: &teloxide::types::Message) -> Option<&str> {
    msg.text().or_else(|| msg.caption())
}

impl TelegramMessageWrapper<'_> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else {
            "channel"
        }
    }
}
