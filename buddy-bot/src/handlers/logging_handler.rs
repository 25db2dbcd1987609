//! Logs every incoming message and the chain's outcome.

use async_trait::async_trait;
use tracing::info;

use crate::core::{Handler, HandlerResponse, Message, Result};

#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.display_name(),
            is_bot = message.user.is_bot,
            chat_id = message.chat.id,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = text.len(),
                "Message answered"
            ),
            other => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                response = ?other,
                "Message not answered"
            ),
        }
        Ok(())
    }
}
