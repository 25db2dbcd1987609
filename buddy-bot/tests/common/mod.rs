//! Shared test doubles: a recording [`Bot`], a canned [`ContentFetcher`], a scripted [`LlmClient`].

#![allow(dead_code)]

use async_trait::async_trait;
use buddy_bot::fetchers::ContentFetcher;
use buddy_bot::{Bot, BotError, Chat, Message, Result, User};
use llm_client::{ChatMessage, LlmClient, LlmError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock Bot that records replies, reactions and typing indicators.
/// Reactions (or replies) can be made to fail to exercise best-effort paths.
#[derive(Default)]
pub struct MockBot {
    pub replies: Mutex<Vec<String>>,
    pub reactions: Mutex<Vec<String>>,
    pub typing: AtomicUsize,
    pub fail_reactions: bool,
    pub fail_replies: bool,
}

impl MockBot {
    pub fn failing_reactions() -> Self {
        Self {
            fail_reactions: true,
            ..Self::default()
        }
    }

    pub fn failing_replies() -> Self {
        Self {
            fail_replies: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.reactions.lock().unwrap().clone()
    }

    pub fn typing_count(&self) -> usize {
        self.typing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn reply_to(&self, _message: &Message, text: &str) -> Result<()> {
        if self.fail_replies {
            return Err(BotError::Bot("Forbidden: bot was kicked".into()));
        }
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn react(&self, _message: &Message, emoji: &str) -> Result<()> {
        if self.fail_reactions {
            return Err(BotError::Bot("Bad Request: REACTION_INVALID".into()));
        }
        self.reactions.lock().unwrap().push(emoji.to_string());
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        self.typing.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub const STUB_JOKE: &str = "Why do programmers prefer dark mode? - Because light attracts bugs.";
pub const STUB_QUOTE: &str = "Simplicity is prerequisite for reliability. — Edsger Dijkstra";

/// Fetcher returning fixed text and recording requested cities.
#[derive(Default)]
pub struct StubFetcher {
    pub cities: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn cities(&self) -> Vec<String> {
        self.cities.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for StubFetcher {
    async fn joke(&self) -> String {
        STUB_JOKE.to_string()
    }

    async fn quote(&self) -> String {
        STUB_QUOTE.to_string()
    }

    async fn weather(&self, city: &str) -> String {
        self.cities.lock().unwrap().push(city.to_string());
        format!("weather for {}", city)
    }
}

/// What the scripted LLM answers.
pub enum LlmScript {
    Answer(&'static str),
    RateLimited,
    Fail,
}

/// LlmClient that replays a script and counts calls.
pub struct StubLlm {
    script: LlmScript,
    pub calls: AtomicUsize,
    pub last_messages: Mutex<Vec<ChatMessage>>,
}

impl StubLlm {
    pub fn new(script: LlmScript) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> std::result::Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages;
        match self.script {
            LlmScript::Answer(text) => Ok(text.to_string()),
            LlmScript::RateLimited => Err(LlmError::RateLimited("429 Too Many Requests".into())),
            LlmScript::Fail => Err(LlmError::Request("connection reset".into())),
        }
    }
}

/// Builds an incoming text message from `username`.
pub fn make_message(content: &str, username: &str, is_bot: bool) -> Message {
    Message {
        id: "1001".to_string(),
        user: User {
            id: 456,
            username: Some(username.to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
            is_bot,
        },
        chat: Chat {
            id: 123,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
    }
}
