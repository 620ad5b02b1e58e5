//! Warden - Telegram group moderation bot
//!
//! Welcomes new members, filters banned words and links, mutes flooders and
//! answers a small set of admin commands. The moderation core turns events
//! into intents without touching the network; the `bot` module carries them
//! out through teloxide.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - Per-chat settings store (MongoDB or in-memory)
//! - `cache` - Moka-backed typed caches
//! - `clock` - Injectable time source
//! - `permissions` - Admin checking with caching
//! - `moderation` - Events, intents and the per-event pipeline
//! - `plugins` - Command handlers
//! - `events` - Welcome, content filter and antiflood
//! - `i18n` - Reply texts
//! - `utils` - Command and duration parsing
//! - `bot` - Telegram transport (with Throttle for API rate limiting)

pub mod bot;
pub mod cache;
pub mod clock;
pub mod config;
pub mod database;
pub mod events;
pub mod i18n;
pub mod moderation;
pub mod permissions;
pub mod plugins;
pub mod utils;

#[cfg(test)]
mod testing;
