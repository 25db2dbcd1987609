use serde::Deserialize;

use super::{FetchError, HttpFetcher};

pub const FALLBACK_QUOTE: &str =
    "Imagination is more important than knowledge. — Albert Einstein";

#[derive(Debug, Deserialize)]
struct QuoteBody {
    content: String,
    author: String,
}

impl HttpFetcher {
    pub(super) async fn try_quote(&self) -> Result<String, FetchError> {
        let body: QuoteBody = self.get_json(&self.endpoints.quote_url, &[]).await?;
        Ok(format!("{} — {}", body.content, body.author))
    }
}
