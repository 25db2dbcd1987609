//! `/ask` backend: one completion request, every failure turned into a reply string.

use llm_client::{ChatMessage, LlmClient, LlmError};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub const NO_RESPONSE: &str = "No response from the assistant.";
pub const OVERLOADED: &str = "⚠️ I'm currently overloaded with requests. Please try again soon!";
pub const REQUEST_FAILED: &str = "❌ Sorry, I couldn't get a response. Please try again later.";

/// Language-model assistant. Requests are never retried.
#[derive(Clone)]
pub struct Assistant {
    llm_client: Arc<dyn LlmClient>,
}

impl fmt::Debug for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assistant").finish_non_exhaustive()
    }
}

impl Assistant {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Answers `prompt` with the model's trimmed reply or a user-facing fallback.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn ask(&self, prompt: &str) -> String {
        let messages = vec![ChatMessage::user(prompt)];
        match self.llm_client.get_llm_response_with_messages(messages).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!("assistant returned empty response");
                    NO_RESPONSE.to_string()
                } else {
                    info!(reply_len = text.len(), "assistant replied");
                    text.to_string()
                }
            }
            Err(e @ LlmError::RateLimited(_)) => {
                warn!(error = %e, "assistant rate limited");
                OVERLOADED.to_string()
            }
            Err(e) => {
                error!(error = %e, "assistant request failed");
                REQUEST_FAILED.to_string()
            }
        }
    }
}
