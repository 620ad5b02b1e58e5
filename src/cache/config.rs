//! Cache configuration.

use std::time::Duration;

/// Configuration for a cache instance.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache.
    pub max_capacity: u64,

    /// Time-to-live for cache entries.
    /// After this duration, entries are evicted by Moka.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl: Some(Duration::from_secs(300)), // 5 minutes
        }
    }
}

impl CacheConfig {
    /// Create a new cache config with the given max capacity.
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            max_capacity,
            ..Default::default()
        }
    }

    /// Set time-to-live for cache entries.
    #[must_use]
    pub fn ttl(mut self, duration: Duration) -> Self {
        self.ttl = Some(duration);
        self
    }

    /// Disable TTL (entries only leave on capacity pressure).
    #[must_use]
    pub fn no_ttl(mut self) -> Self {
        self.ttl = None;
        self
    }

    /// Admin status entries.
    ///
    /// Expiry is decided by the admin cache itself against its clock, so
    /// Moka only bounds the memory.
    pub fn admin_status() -> Self {
        Self::with_capacity(50_000).no_ttl()
    }

    /// Per-chat settings read cache, refreshed on every successful write.
    pub fn chat_settings() -> Self {
        Self::with_capacity(10_000).ttl(Duration::from_secs(600)) // 10 minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_status_has_no_moka_ttl() {
        let config = CacheConfig::admin_status();
        assert!(config.ttl.is_none());
        assert_eq!(config.max_capacity, 50_000);
    }

    #[test]
    fn chat_settings_expire_after_ten_minutes() {
        let config = CacheConfig::chat_settings();
        assert_eq!(config.ttl, Some(Duration::from_secs(600)));
    }
}
