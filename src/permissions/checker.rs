//! Admin status cache.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::{CacheConfig, TypedCache};
use crate::clock::Clock;

/// How long a lookup result stays valid.
pub const ADMIN_TTL_MILLIS: i64 = 10 * 60 * 1000;

/// Failure of the external membership lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    #[cfg(test)]
    #[error("membership lookup failed: {0}")]
    Other(String),
}

/// External "what is this user's status in this chat" query.
///
/// Statuses use the Bot API names: `creator`, `administrator`, `member`,
/// `restricted`, `left`, `kicked`.
#[async_trait]
pub trait MembershipLookup: Send + Sync {
    async fn lookup_membership(&self, chat_id: i64, user_id: u64) -> Result<String, LookupError>;
}

/// Whether a membership status carries moderation privileges.
pub fn is_privileged_status(status: &str) -> bool {
    matches!(status, "creator" | "administrator")
}

/// Cached lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminEntry {
    pub is_admin: bool,
    /// Epoch millis after which the entry is ignored.
    pub expires_at: i64,
}

/// Cache key for admin lookups.
type AdminCacheKey = (i64, u64); // (chat_id, user_id)

/// Admin checker with a fixed 10 minute cache.
///
/// Bot owners (from OWNER_IDS env) are privileged everywhere and never
/// looked up. Concurrent misses on the same key may each query the lookup.
#[derive(Clone)]
pub struct AdminCache {
    lookup: Arc<dyn MembershipLookup>,
    cache: TypedCache<AdminCacheKey, AdminEntry>,
    clock: Arc<dyn Clock>,
    owner_ids: Arc<[u64]>,
}

impl AdminCache {
    pub fn new(lookup: Arc<dyn MembershipLookup>, clock: Arc<dyn Clock>, owner_ids: Vec<u64>) -> Self {
        Self {
            lookup,
            cache: TypedCache::new("admin_status", CacheConfig::admin_status()),
            clock,
            owner_ids: owner_ids.into(),
        }
    }

    /// Check if a user is a bot owner.
    #[inline]
    pub fn is_bot_owner(&self, user_id: u64) -> bool {
        self.owner_ids.contains(&user_id)
    }

    /// Check if a user is privileged in a chat.
    ///
    /// Lookup failures count as "not an admin" and are not cached.
    pub async fn is_admin(&self, chat_id: i64, user_id: u64) -> bool {
        if self.is_bot_owner(user_id) {
            debug!("User {} is bot owner, treating as admin", user_id);
            return true;
        }

        let cache_key = (chat_id, user_id);

        if let Some(entry) = self.cache.get(&cache_key)
            && self.clock.now_millis() < entry.expires_at
        {
            debug!("Admin cache hit for user {} in chat {}", user_id, chat_id);
            return entry.is_admin;
        }

        debug!("Admin cache miss for user {} in chat {}", user_id, chat_id);

        match self.lookup.lookup_membership(chat_id, user_id).await {
            Ok(status) => {
                let is_admin = is_privileged_status(&status);
                self.cache.insert(
                    cache_key,
                    AdminEntry {
                        is_admin,
                        expires_at: self.clock.now_millis() + ADMIN_TTL_MILLIS,
                    },
                );
                is_admin
            }
            Err(e) => {
                warn!("Admin lookup failed for user {} in chat {}: {}", user_id, chat_id, e);
                false
            }
        }
    }

    /// Cached entry for a pair, expired or not.
    #[cfg(test)]
    pub fn cached(&self, chat_id: i64, user_id: u64) -> Option<AdminEntry> {
        self.cache.get(&(chat_id, user_id))
    }
}

impl std::fmt::Debug for AdminCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCache")
            .field("cache", &self.cache)
            .field("owner_ids", &self.owner_ids)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::testing::CountingLookup;

    fn admin_cache(lookup: &Arc<CountingLookup>, clock: &ManualClock) -> AdminCache {
        AdminCache::new(lookup.clone(), Arc::new(clock.clone()), vec![42])
    }

    #[test]
    fn only_creator_and_administrator_are_privileged() {
        assert!(is_privileged_status("creator"));
        assert!(is_privileged_status("administrator"));
        for status in ["member", "restricted", "left", "kicked", ""] {
            assert!(!is_privileged_status(status));
        }
    }

    #[tokio::test]
    async fn second_check_within_ttl_does_not_look_up() {
        let lookup = Arc::new(CountingLookup::default());
        lookup.set_status(-1, 7, "administrator");
        let clock = ManualClock::new(0);
        let admins = admin_cache(&lookup, &clock);

        assert!(admins.is_admin(-1, 7).await);
        clock.advance_secs(9 * 60);
        assert!(admins.is_admin(-1, 7).await);
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_recomputed() {
        let lookup = Arc::new(CountingLookup::default());
        lookup.set_status(-1, 7, "administrator");
        let clock = ManualClock::new(0);
        let admins = admin_cache(&lookup, &clock);

        assert!(admins.is_admin(-1, 7).await);
        lookup.set_status(-1, 7, "member");
        clock.advance_secs(10 * 60);

        assert!(!admins.is_admin(-1, 7).await);
        assert_eq!(lookup.calls(), 2);
        assert_eq!(
            admins.cached(-1, 7),
            Some(AdminEntry { is_admin: false, expires_at: 20 * 60 * 1000 })
        );
    }

    #[tokio::test]
    async fn non_admins_are_cached_too() {
        let lookup = Arc::new(CountingLookup::default());
        let clock = ManualClock::new(0);
        let admins = admin_cache(&lookup, &clock);

        assert!(!admins.is_admin(-1, 8).await);
        assert!(!admins.is_admin(-1, 8).await);
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test]
    async fn lookup_failure_fails_closed_and_retries_next_time() {
        let lookup = Arc::new(CountingLookup::default());
        lookup.set_status(-1, 7, "creator");
        lookup.set_failing(true);
        let clock = ManualClock::new(0);
        let admins = admin_cache(&lookup, &clock);

        assert!(!admins.is_admin(-1, 7).await);
        assert!(admins.cached(-1, 7).is_none());

        lookup.set_failing(false);
        assert!(admins.is_admin(-1, 7).await);
        assert_eq!(lookup.calls(), 2);
    }

    #[tokio::test]
    async fn bot_owner_skips_lookup() {
        let lookup = Arc::new(CountingLookup::default());
        let clock = ManualClock::new(0);
        let admins = admin_cache(&lookup, &clock);

        assert!(admins.is_admin(-1, 42).await);
        assert_eq!(lookup.calls(), 0);
    }
}
