//! Incoming message type for the core model.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single delivered message: author, chat, raw text. Lives only for one handler run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text, or the caption of a media message.
    pub content: String,
}
