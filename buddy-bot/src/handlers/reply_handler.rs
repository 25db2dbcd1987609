//! The dispatcher: classifies each message and sends exactly one reply.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::dispatch::{classify_message, Intent, SmallTalk};
use crate::assistant::Assistant;
use crate::core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use crate::fetchers::ContentFetcher;
use crate::responder::{self, reaction};

/// Terminal handler: turns an [`Intent`] into a reply through the injected [`Bot`].
///
/// Upstream failures are already absorbed by [`ContentFetcher`] and [`Assistant`]; only a failed
/// reply send surfaces as an error.
#[derive(Clone)]
pub struct ReplyHandler {
    bot: Arc<dyn Bot>,
    fetcher: Arc<dyn ContentFetcher>,
    assistant: Option<Assistant>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl ReplyHandler {
    /// `assistant: None` disables `/ask`. `bot_username` is filled once the bot learns its own name.
    pub fn new(
        bot: Arc<dyn Bot>,
        fetcher: Arc<dyn ContentFetcher>,
        assistant: Option<Assistant>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            fetcher,
            assistant,
            bot_username,
        }
    }

    /// Best-effort: a failed reaction never blocks the reply.
    async fn react(&self, message: &Message, emoji: &str) {
        if let Err(e) = self.bot.react(message, emoji).await {
            debug!(error = %e, emoji = %emoji, "reaction failed, ignoring");
        }
    }

    /// Best-effort, like reactions.
    async fn typing(&self, chat: &Chat) {
        if let Err(e) = self.bot.send_typing(chat).await {
            debug!(error = %e, "typing indicator failed, ignoring");
        }
    }

    async fn reply_for(&self, message: &Message, intent: Intent<&Assistant>) -> String {
        let name = message.user.display_name();
        match intent {
            Intent::Help => responder::help(self.assistant.is_some()),
            Intent::Joke => responder::joke_reply(&self.fetcher.joke().await),
            Intent::Inspire => responder::inspire_reply(&self.fetcher.quote().await),
            Intent::Weather(None) => responder::MISSING_CITY.to_string(),
            Intent::Weather(Some(city)) => self.fetcher.weather(&city).await,
            Intent::Ask(_, None) => responder::MISSING_PROMPT.to_string(),
            Intent::Ask(assistant, Some(prompt)) => {
                self.typing(&message.chat).await;
                responder::ask_reply(&assistant.ask(&prompt).await)
            }
            Intent::SmallTalk(SmallTalk::Greeting) => responder::greeting(name),
            Intent::SmallTalk(SmallTalk::Farewell) => responder::farewell(name),
            Intent::SmallTalk(SmallTalk::Thanks) => responder::thanks(name),
            Intent::SmallTalk(SmallTalk::Laugh) => {
                self.react(message, reaction::LAUGH).await;
                responder::LAUGH_REPLY.to_string()
            }
            Intent::SmallTalk(SmallTalk::Compliment) => responder::compliment(),
            Intent::Fallback => {
                for emoji in reaction::FALLBACK {
                    self.react(message, emoji).await;
                }
                responder::fallback()
            }
        }
    }
}

#[async_trait]
impl Handler for ReplyHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.trim().is_empty() {
            return Ok(HandlerResponse::Continue);
        }

        let bot_username = self.bot_username.read().await.clone();
        let Some(intent) =
            classify_message(message, self.assistant.as_ref(), bot_username.as_deref())
        else {
            debug!(user_id = message.user.id, "bot author, ignoring");
            return Ok(HandlerResponse::Stop);
        };
        debug!(intent = ?intent, "message classified");

        let reply = self.reply_for(message, intent).await;
        self.bot.reply_to(message, &reply).await?;
        info!(chat_id = message.chat.id, reply_len = reply.len(), "reply sent");
        Ok(HandlerResponse::Reply(reply))
    }
}
