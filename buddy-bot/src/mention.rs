//! Telegram addressing helpers.
//!
//! In group chats Telegram clients send commands as `/joke@my_bot`; the suffix is stripped only
//! when it names this bot, so commands meant for other bots stay unrecognised.

/// Returns `text` with a leading `/command@bot_username` rewritten to `/command`.
pub fn strip_command_suffix<'a>(text: &'a str, bot_username: Option<&str>) -> std::borrow::Cow<'a, str> {
    use std::borrow::Cow;

    let Some(username) = bot_username else {
        return Cow::Borrowed(text);
    };
    let trimmed = text.trim_start();
    if !trimmed.starts_with('/') {
        return Cow::Borrowed(text);
    }
    let token_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (token, rest) = trimmed.split_at(token_end);
    match token.split_once('@') {
        Some((command, target)) if target.eq_ignore_ascii_case(username) => {
            Cow::Owned(format!("{}{}", command, rest))
        }
        _ => Cow::Borrowed(text),
    }
}
