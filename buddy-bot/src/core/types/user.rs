//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// Name used when a user has neither a username nor a first name.
const ANONYMOUS_NAME: &str = "friend";

/// User identity (id, username, names, bot flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Set for bot accounts; the dispatcher never answers them.
    pub is_bot: bool,
}

impl User {
    /// Name to address the user by in replies: username, else first name, else "friend".
    pub fn display_name(&self) -> &str {
        [self.username.as_deref(), self.first_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }
}
