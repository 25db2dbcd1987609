//! Canned replies: emoji, phrase tables, and the fixed command texts.
//!
//! Pure functions; random selection is uniform over each table. Every table is non-empty, so
//! selection cannot fail.

use rand::seq::SliceRandom;
use rand::Rng;

pub mod emoji {
    pub const HAPPY: &str = "😄";
    pub const SAD: &str = "😢";
    pub const LOVE: &str = "❤️";
    pub const FIRE: &str = "🔥";
    pub const IDEA: &str = "💡";
    pub const ROBOT: &str = "🤖";
    pub const SPARKLES: &str = "✨";
    pub const WAVE: &str = "👋";
    pub const THUMBS_UP: &str = "👍";
    pub const CLAP: &str = "👏";
    pub const PARTY: &str = "🥳";
}

/// Reactions must come from Telegram's fixed reaction set.
pub mod reaction {
    pub const LAUGH: &str = "🤣";
    pub const FALLBACK: [&str; 2] = ["👾", "⚡"];
}

/// `{name}` is replaced with the user's display name.
const GREETINGS: &[&str] = &[
    "👋 Hey {name}! How's it going?",
    "Hello {name}! 😄 Great to see you.",
    "Hi {name}! ✨ What's up today?",
    "Hey hey {name}! 🥳 Ready for some fun?",
    "Hola {name}! 👋 I'm doing great, thanks for asking!",
];

const FAREWELLS: &[&str] = &[
    "👋 Bye {name}! Take care!",
    "See you later, {name}! ✨",
    "Goodbye {name}! 😄 Come back soon.",
    "Catch you later, {name}! 🔥",
];

const COMPLIMENTS: &[&str] = &[
    "Aww, thank you! ❤️ You're awesome too!",
    "You just made my circuits glow! ✨",
    "That's so nice of you! 🥳",
    "👏 Right back at you!",
];

const FALLBACKS: &[&str] = &[
    "🤖 I'm not sure what you mean, but I'm listening!",
    "💡 Try /help to see what I can do.",
    "Interesting... tell me more! ✨",
    "Hmm, I didn't quite get that. 🤔 Type /help for commands.",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, table: &'a [&'static str]) -> &'a str {
    table.choose(rng).copied().unwrap_or_default()
}

pub fn greeting_with<R: Rng + ?Sized>(rng: &mut R, username: &str) -> String {
    pick(rng, GREETINGS).replace("{name}", username)
}

pub fn farewell_with<R: Rng + ?Sized>(rng: &mut R, username: &str) -> String {
    pick(rng, FAREWELLS).replace("{name}", username)
}

pub fn compliment_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, COMPLIMENTS).to_string()
}

pub fn fallback_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FALLBACKS).to_string()
}

pub fn greeting(username: &str) -> String {
    greeting_with(&mut rand::thread_rng(), username)
}

pub fn farewell(username: &str) -> String {
    farewell_with(&mut rand::thread_rng(), username)
}

pub fn compliment() -> String {
    compliment_with(&mut rand::thread_rng())
}

pub fn fallback() -> String {
    fallback_with(&mut rand::thread_rng())
}

/// Command list. The `/ask` line only appears when the assistant is configured.
pub fn help(ask_enabled: bool) -> String {
    let mut text = format!(
        "{} Here's what I can do:\n\
         • /joke for a joke 🤣\n\
         • /inspire for a quote ✨\n\
         • /weather <city> for weather 🌦️\n",
        emoji::IDEA
    );
    if ask_enabled {
        text.push_str("• /ask <question> to chat with me 🤖\n");
    }
    text.push_str("• Say hi, thanks, or anything else for a friendly reply!");
    text
}

pub fn thanks(username: &str) -> String {
    format!("{} You're welcome, {}!", emoji::THUMBS_UP, username)
}

pub const LAUGH_REPLY: &str = "Glad I could make you laugh! 😄";
pub const MISSING_CITY: &str = "Please provide a city name 🌍";
pub const MISSING_PROMPT: &str = "Please provide a question or prompt.";

pub fn joke_reply(joke: &str) -> String {
    format!("{} Here's a joke:\n{}", emoji::HAPPY, joke)
}

pub fn inspire_reply(quote: &str) -> String {
    format!("{} *{}*", emoji::SPARKLES, quote)
}

pub fn ask_reply(answer: &str) -> String {
    format!("{} {}", emoji::ROBOT, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tables_are_non_empty() {
        for table in [GREETINGS, FAREWELLS, COMPLIMENTS, FALLBACKS] {
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn test_greeting_and_farewell_interpolate_name() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let g = greeting_with(&mut rng, "alex");
            assert!(g.contains("alex"));
            assert!(!g.contains("{name}"));

            let f = farewell_with(&mut rng, "sam");
            assert!(f.contains("sam"));
        }
    }

    #[test]
    fn test_selection_covers_whole_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: std::collections::HashSet<String> =
            (0..200).map(|_| fallback_with(&mut rng)).collect();
        assert_eq!(seen.len(), FALLBACKS.len());
    }

    #[test]
    fn test_help_lists_ask_only_when_enabled() {
        assert!(help(true).contains("/ask <question>"));
        assert!(!help(false).contains("/ask"));
        assert!(help(false).starts_with("💡"));
    }

    #[test]
    fn test_fixed_replies() {
        assert_eq!(thanks("alex"), "👍 You're welcome, alex!");
        assert_eq!(joke_reply("a - b"), "😄 Here's a joke:\na - b");
        assert_eq!(inspire_reply("q — a"), "✨ *q — a*");
        assert_eq!(ask_reply("42"), "🤖 42");
    }
}
