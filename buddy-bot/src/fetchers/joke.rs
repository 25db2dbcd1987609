use serde::Deserialize;

use super::{FetchError, HttpFetcher};

pub const FALLBACK_JOKE: &str =
    "Why did the robot go on vacation? Because it needed to recharge its batteries! 🔋";

#[derive(Debug, Deserialize)]
struct JokeBody {
    setup: String,
    punchline: String,
}

impl HttpFetcher {
    pub(super) async fn try_joke(&self) -> Result<String, FetchError> {
        let body: JokeBody = self.get_json(&self.endpoints.joke_url, &[]).await?;
        Ok(format!("{} - {}", body.setup, body.punchline))
    }
}
