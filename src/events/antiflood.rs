//! Antiflood sliding window.
//!
//! Tracks recent message timestamps per (chat, user). Windows of users who
//! stop posting are never evicted.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::database::ChatSettings;

/// Result of recording one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodCheck {
    pub within_limit: bool,
    /// Stored timestamps after this call (empty after a violation).
    pub window: Vec<i64>,
}

/// Global flood tracker (in-memory, sharded by DashMap).
#[derive(Clone, Default)]
pub struct FloodDetector {
    windows: Arc<DashMap<(i64, u64), Vec<i64>>>,
}

impl FloodDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message at `now` (epoch millis) and check the limit.
    ///
    /// Timestamps older than the chat's window are dropped before `now` is
    /// appended. Going over `flood_limit` reports a violation and resets the
    /// window to empty.
    pub fn check(&self, chat_id: i64, user_id: u64, settings: &ChatSettings, now: i64) -> FloodCheck {
        let window_ms = settings.flood_window_millis();

        // The entry guard holds the shard lock, so updates to one key are serialized.
        let mut times = self.windows.entry((chat_id, user_id)).or_default();

        times.retain(|&t| now - t < window_ms);
        times.push(now);

        let within_limit = times.len() <= settings.flood_limit as usize;
        if !within_limit {
            debug!(
                "User {} exceeded {} msgs / {}s in chat {}",
                user_id, settings.flood_limit, settings.flood_window_secs, chat_id
            );
            times.clear();
        }

        FloodCheck {
            within_limit,
            window: times.clone(),
        }
    }

    /// Current stored window for a pair.
    #[cfg(test)]
    pub fn window(&self, chat_id: i64, user_id: u64) -> Vec<i64> {
        self.windows
            .get(&(chat_id, user_id))
            .map(|w| w.value().clone())
            .unwrap_or_default()
    }

    /// Number of (chat, user) pairs ever seen.
    #[cfg(test)]
    pub fn tracked(&self) -> usize {
        self.windows.len()
    }
}

impl std::fmt::Debug for FloodDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloodDetector")
            .field("tracked", &self.windows.len())
            .finish()
    }
}
