//! Per-chat moderation settings.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::i18n::get_text;

/// Welcome text used until an admin sets one.
pub const DEFAULT_WELCOME_TEXT: &str = "Welcome to the group 👋";

/// Moderation settings for one chat.
///
/// Field names on the wire match the key-value records the bot has always
/// written (`welcome`, `flood_window`, ...), so old records keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Text appended to the new member's name on join.
    #[serde(rename = "welcome", default = "default_welcome_text")]
    pub welcome_text: String,

    /// Whether links and mentions may be posted by non-admins.
    #[serde(default)]
    pub links_allowed: bool,

    /// Lower-cased banned substrings, unique, in insertion order.
    #[serde(default)]
    pub banned_words: Vec<String>,

    /// Maximum messages per user inside the flood window.
    #[serde(default = "default_flood_limit")]
    pub flood_limit: u32,

    /// Flood window length in seconds.
    #[serde(rename = "flood_window", default = "default_flood_window")]
    pub flood_window_secs: u32,

    /// Mute duration applied to flooders, in seconds.
    #[serde(rename = "auto_mute", default = "default_auto_mute")]
    pub auto_mute_secs: u32,
}

fn default_welcome_text() -> String {
    DEFAULT_WELCOME_TEXT.to_string()
}

fn default_flood_limit() -> u32 {
    5
}

fn default_flood_window() -> u32 {
    10
}

fn default_auto_mute() -> u32 {
    60
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            welcome_text: default_welcome_text(),
            links_allowed: false,
            banned_words: Vec::new(),
            flood_limit: default_flood_limit(),
            flood_window_secs: default_flood_window(),
            auto_mute_secs: default_auto_mute(),
        }
    }
}

impl ChatSettings {
    /// Defaults with the welcome text in the given language.
    pub fn for_locale(locale: &str) -> Self {
        Self {
            welcome_text: get_text(locale, "welcome.default"),
            ..Self::default()
        }
    }

    /// Add a banned word (lower-cased). Returns `false` if it was already there.
    pub fn add_word(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        if self.banned_words.contains(&word) {
            return false;
        }
        self.banned_words.push(word);
        true
    }

    /// Remove a banned word (lower-cased). Returns `false` if it wasn't there.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        match self.banned_words.iter().position(|w| *w == word) {
            Some(pos) => {
                self.banned_words.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Flood window in milliseconds.
    pub fn flood_window_millis(&self) -> i64 {
        i64::from(self.flood_window_secs) * 1000
    }
}

/// MongoDB document wrapping one chat's settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettingsDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    #[serde(flatten)]
    pub settings: ChatSettings,
}

impl ChatSettingsDoc {
    pub fn new(chat_id: i64, settings: ChatSettings) -> Self {
        Self {
            id: None,
            chat_id,
            settings,
        }
    }
}
