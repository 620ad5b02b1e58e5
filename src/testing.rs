//! Fakes shared by unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::database::{ChatSettings, MemoryBackend, SettingsBackend, StoreError};
use crate::permissions::{LookupError, MembershipLookup};

/// Membership lookup answering from a map and counting calls.
/// Unknown pairs are plain members.
#[derive(Debug, Default)]
pub struct CountingLookup {
    statuses: DashMap<(i64, u64), String>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl CountingLookup {
    pub fn set_status(&self, chat_id: i64, user_id: u64, status: &str) {
        self.statuses.insert((chat_id, user_id), status.to_string());
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MembershipLookup for CountingLookup {
    async fn lookup_membership(&self, chat_id: i64, user_id: u64) -> Result<String, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(LookupError::Other("lookup refused".into()));
        }
        Ok(self
            .statuses
            .get(&(chat_id, user_id))
            .map(|s| s.value().clone())
            .unwrap_or_else(|| "member".to_string()))
    }
}

/// Settings backend whose reads and writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FlakyBackend {
    pub inner: MemoryBackend,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub loads: AtomicUsize,
}

#[async_trait]
impl SettingsBackend for FlakyBackend {
    async fn load(&self, chat_id: i64) -> Result<Option<ChatSettings>, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read refused".into()));
        }
        self.inner.load(chat_id).await
    }

    async fn save(&self, chat_id: i64, settings: &ChatSettings) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write refused".into()));
        }
        self.inner.save(chat_id, settings).await
    }
}
