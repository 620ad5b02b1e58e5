//! Content filter: banned words and link lock.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::database::ChatSettings;

/// Why a message breaks the chat's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    BannedWord,
    LinkPolicy,
}

/// URLs, t.me / telegram.me paths and @mentions of 5+ characters.
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(https?://\S+|t\.me/\S+|telegram\.me/\S+|@[a-z0-9_]{5,})")
        .expect("link pattern is a valid regex")
});

/// Check a message against the chat's settings.
///
/// The text (or the caption when the text is empty) is lower-cased and gets
/// a trailing space. Banned words are plain substring matches, so they also
/// hit inside longer words. The banned-word check wins over the link check.
pub fn evaluate(
    text: Option<&str>,
    caption: Option<&str>,
    has_rich_entities: bool,
    settings: &ChatSettings,
) -> Option<Violation> {
    let raw = text.filter(|t| !t.is_empty()).or(caption).unwrap_or_default();
    let body = format!("{} ", raw.to_lowercase());

    if settings
        .banned_words
        .iter()
        .any(|w| !w.is_empty() && body.contains(w.as_str()))
    {
        return Some(Violation::BannedWord);
    }

    if !settings.links_allowed && (has_rich_entities || LINK_PATTERN.is_match(&body)) {
        return Some(Violation::LinkPolicy);
    }

    None
}
