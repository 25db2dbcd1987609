//! Message classification: maps one incoming message to exactly one [`Intent`].
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! bot author (no intent) → `/help` → `/joke` → `/inspire` → `/weather` → `/ask` → small talk
//! (greeting, farewell, thanks, laugh, compliment, in that order) → fallback.
//! Commands compare the trimmed, lowercased text; small talk is unanchored substring containment.

use crate::core::Message;
use crate::mention;

/// Small-talk reply categories, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalk {
    Greeting,
    Farewell,
    Thanks,
    Laugh,
    Compliment,
}

/// What the dispatcher will do with a message.
///
/// `A` is the assistant handle `/ask` runs on; `Ask` can only be built when one is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<A = ()> {
    Help,
    Joke,
    Inspire,
    /// `None` when no city was given.
    Weather(Option<String>),
    /// Prompt is `None` when empty.
    Ask(A, Option<String>),
    SmallTalk(SmallTalk),
    Fallback,
}

/// Trigger word sets. Order is precedence.
pub const SMALL_TALK_RULES: &[(SmallTalk, &[&str])] = &[
    (SmallTalk::Greeting, &["hi", "hello", "hey", "hola", "how are you"]),
    (SmallTalk::Farewell, &["bye", "goodbye", "see ya", "later", "cya"]),
    (SmallTalk::Thanks, &["thank you", "thanks", "thx", "ty"]),
    (SmallTalk::Laugh, &["lol", "haha", "lmao", "rofl"]),
    (SmallTalk::Compliment, &["awesome", "great", "cool", "nice", "love it"]),
];

const WEATHER_COMMAND: &str = "/weather";
const ASK_COMMAND: &str = "/ask";

/// Classifies a delivered message; `None` for bot authors, which get no reply and no reaction.
/// `bot_username` lets `/cmd@bot_username` count as `/cmd`.
pub fn classify_message<A>(
    message: &Message,
    assistant: Option<A>,
    bot_username: Option<&str>,
) -> Option<Intent<A>> {
    if message.user.is_bot {
        return None;
    }
    let text = mention::strip_command_suffix(&message.content, bot_username);
    Some(classify_text(&text, assistant))
}

/// Classifies raw text from a human author. Without an assistant `/ask` is ordinary text.
pub fn classify_text<A>(text: &str, assistant: Option<A>) -> Intent<A> {
    let content = text.trim();
    let lower = content.to_lowercase();

    match lower.as_str() {
        "/help" => return Intent::Help,
        "/joke" => return Intent::Joke,
        "/inspire" => return Intent::Inspire,
        _ => {}
    }

    if lower.starts_with(WEATHER_COMMAND) {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let city = (tokens.len() >= 2).then(|| tokens[1..].join(" "));
        return Intent::Weather(city);
    }

    if let Some(assistant) = assistant {
        let (command, rest) = content
            .split_once(char::is_whitespace)
            .unwrap_or((content, ""));
        if command.eq_ignore_ascii_case(ASK_COMMAND) {
            let prompt = rest.trim();
            return Intent::Ask(assistant, (!prompt.is_empty()).then(|| prompt.to_string()));
        }
    }

    SMALL_TALK_RULES
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(kind, _)| Intent::SmallTalk(*kind))
        .unwrap_or(Intent::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chat, User};

    fn plain(text: &str) -> Intent {
        classify_text(text, None)
    }

    fn with_ask(text: &str) -> Intent {
        classify_text(text, Some(()))
    }

    #[test]
    fn test_exact_commands_ignore_case_and_whitespace() {
        assert_eq!(plain("  /HELP \n"), Intent::Help);
        assert_eq!(plain("/Joke"), Intent::Joke);
        assert_eq!(plain("\t/inspire  "), Intent::Inspire);
    }

    #[test]
    fn test_exact_commands_do_not_prefix_match() {
        assert_ne!(plain("/jokes"), Intent::Joke);
        assert_ne!(plain("/help me"), Intent::Help);
    }

    #[test]
    fn test_weather_without_city() {
        assert_eq!(plain("/weather"), Intent::Weather(None));
        assert_eq!(plain("  /WEATHER   "), Intent::Weather(None));
    }

    #[test]
    fn test_weather_rejoins_city_tokens_with_single_spaces() {
        assert_eq!(
            plain("/weather San Francisco"),
            Intent::Weather(Some("San Francisco".into()))
        );
        assert_eq!(
            plain("/weather   Rio   de  Janeiro "),
            Intent::Weather(Some("Rio de Janeiro".into()))
        );
    }

    #[test]
    fn test_ask_only_when_enabled() {
        assert_eq!(
            with_ask("/ask what is rust?"),
            Intent::Ask((), Some("what is rust?".into()))
        );
        assert_eq!(with_ask("/ask"), Intent::Ask((), None));
        assert_eq!(with_ask("/ASK    "), Intent::Ask((), None));
        assert_eq!(plain("/ask what is rust?"), Intent::Fallback);
    }

    #[test]
    fn test_ask_keeps_prompt_case() {
        assert_eq!(
            with_ask("/Ask Explain TCP"),
            Intent::Ask((), Some("Explain TCP".into()))
        );
    }

    #[test]
    fn test_small_talk_categories() {
        assert_eq!(plain("Hello there"), Intent::SmallTalk(SmallTalk::Greeting));
        assert_eq!(plain("ok bye"), Intent::SmallTalk(SmallTalk::Farewell));
        assert_eq!(plain("Thanks so much!"), Intent::SmallTalk(SmallTalk::Thanks));
        assert_eq!(plain("LMAO"), Intent::SmallTalk(SmallTalk::Laugh));
        assert_eq!(plain("cool"), Intent::SmallTalk(SmallTalk::Compliment));
        assert_eq!(plain("zzz"), Intent::Fallback);
    }

    #[test]
    fn test_earlier_category_wins() {
        // "lol" (laugh) precedes "great" (compliment).
        assert_eq!(
            plain("lol that's great"),
            Intent::SmallTalk(SmallTalk::Laugh)
        );
        // "hey" (greeting) precedes "bye" (farewell).
        assert_eq!(plain("hey, bye"), Intent::SmallTalk(SmallTalk::Greeting));
    }

    #[test]
    fn test_substring_match_is_unanchored() {
        // "nice" inside a longer word still counts.
        assert_eq!(plain("niceee"), Intent::SmallTalk(SmallTalk::Compliment));
    }

    fn message(content: &str, is_bot: bool) -> Message {
        Message {
            id: "1".into(),
            user: User {
                id: 7,
                username: Some("alex".into()),
                first_name: None,
                last_name: None,
                is_bot,
            },
            chat: Chat {
                id: 42,
                chat_type: "group".into(),
            },
            content: content.into(),
        }
    }

    #[test]
    fn test_bot_author_has_no_intent() {
        assert_eq!(classify_message(&message("/help", true), Some(()), None), None);
        assert_eq!(
            classify_message(&message("/help", false), Some(()), None),
            Some(Intent::Help)
        );
    }

    #[test]
    fn test_command_suffix_for_this_bot_only() {
        assert_eq!(
            classify_message(&message("/joke@buddy_bot", false), None::<()>, Some("buddy_bot")),
            Some(Intent::Joke)
        );
        assert_ne!(
            classify_message(&message("/joke@other_bot", false), None::<()>, Some("buddy_bot")),
            Some(Intent::Joke)
        );
    }
}
