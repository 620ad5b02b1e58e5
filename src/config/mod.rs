//! Configuration module for Warden.
//!
//! Loads configuration from environment variables. `main` reads `.env` first.

use std::env;

use thiserror::Error;
use url::Url;

use crate::i18n;

/// Bot running mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Invalid or missing configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub bot_mode: BotMode,
    pub webhook_url: Option<Url>,
    pub webhook_port: u16,
    /// Secret token Telegram echoes back on webhook calls.
    pub webhook_secret: Option<String>,

    /// Owner user IDs (comma-separated)
    /// These users count as admins in every chat.
    pub owner_ids: Vec<u64>,

    // MongoDB. Without a URI settings are kept in memory.
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,

    /// Language for bot replies.
    pub locale: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| var(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let bot_mode = match get("BOT_MODE").map(|m| m.to_lowercase()).as_deref() {
            None | Some("polling") => BotMode::Polling,
            Some("webhook") => BotMode::Webhook,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "BOT_MODE",
                    value: other.to_string(),
                });
            }
        };

        let webhook_url = get("WEBHOOK_URL")
            .map(|raw| {
                Url::parse(&raw).map_err(|_| ConfigError::Invalid {
                    name: "WEBHOOK_URL",
                    value: raw,
                })
            })
            .transpose()?;

        // Validate webhook URL is set if mode is webhook
        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::Missing("WEBHOOK_URL"));
        }

        let webhook_port = match get("WEBHOOK_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "WEBHOOK_PORT",
                value: raw,
            })?,
            None => 8443,
        };

        // Parse owner IDs
        let owner_ids = get("OWNER_IDS")
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| s.trim().parse::<u64>().ok())
            .collect();

        let locale = get("BOT_LOCALE")
            .map(|l| l.to_lowercase())
            .unwrap_or_else(|| i18n::DEFAULT_LOCALE.to_string());
        if !i18n::is_supported(&locale) {
            return Err(ConfigError::Invalid {
                name: "BOT_LOCALE",
                value: locale,
            });
        }

        Ok(Self {
            bot_token,
            bot_mode,
            webhook_url,
            webhook_port,
            webhook_secret: get("WEBHOOK_SECRET"),
            owner_ids,
            mongodb_uri: get("MONGODB_URI"),
            mongodb_database: get("MONGODB_DATABASE").unwrap_or_else(|| "warden".to_string()),
            locale,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = load(&[("BOT_TOKEN", "123:abc")]).unwrap();

        assert_eq!(config.bot_mode, BotMode::Polling);
        assert_eq!(config.webhook_port, 8443);
        assert!(config.owner_ids.is_empty());
        assert!(config.mongodb_uri.is_none());
        assert_eq!(config.mongodb_database, "warden");
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn token_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("BOT_TOKEN"));
        assert_eq!(load(&[("BOT_TOKEN", "  ")]).unwrap_err(), ConfigError::Missing("BOT_TOKEN"));
    }

    #[test]
    fn webhook_mode_needs_a_valid_url() {
        let err = load(&[("BOT_TOKEN", "t"), ("BOT_MODE", "Webhook")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("WEBHOOK_URL"));

        let err = load(&[("BOT_TOKEN", "t"), ("BOT_MODE", "webhook"), ("WEBHOOK_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "WEBHOOK_URL", .. }));

        let config = load(&[
            ("BOT_TOKEN", "t"),
            ("BOT_MODE", "webhook"),
            ("WEBHOOK_URL", "https://bot.example/hook"),
            ("WEBHOOK_PORT", "8080"),
            ("WEBHOOK_SECRET", "s3cret"),
        ])
        .unwrap();
        assert_eq!(config.bot_mode, BotMode::Webhook);
        assert_eq!(config.webhook_port, 8080);
        assert_eq!(config.webhook_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn owner_ids_skip_garbage() {
        let config = load(&[("BOT_TOKEN", "t"), ("OWNER_IDS", "1, 2,x,,3")]).unwrap();
        assert_eq!(config.owner_ids, vec![1, 2, 3]);
    }

    #[test]
    fn unknown_mode_and_locale_are_rejected() {
        assert!(load(&[("BOT_TOKEN", "t"), ("BOT_MODE", "push")]).is_err());
        assert!(load(&[("BOT_TOKEN", "t"), ("BOT_LOCALE", "xx")]).is_err());
        assert_eq!(load(&[("BOT_TOKEN", "t"), ("BOT_LOCALE", "FA")]).unwrap().locale, "fa");
    }
}
