//! Polling loop: converts teloxide messages to core::Message and passes them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use crate::responder::emoji;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::adapters::{message_text, TelegramMessageWrapper};

/// Learns the bot's own username (the "ready" step), then runs the teloxide REPL until shutdown.
/// Each text or captioned message is handled in its own task; other updates are skipped.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> anyhow::Result<()> {
    let me = bot.get_me().await?;
    let username = me.user.username.clone().unwrap_or_else(|| me.user.first_name.clone());
    *bot_username.write().await = me.user.username.clone();
    info!("{} {} is online!", emoji::ROBOT, username);

    let chain = handler_chain;
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            if message_text(&msg).is_none() {
                info!(chat_id = msg.chat.id.0, "Skipping message without text or caption");
                return respond(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    warn!("REPL stopped");
    Ok(())
}
