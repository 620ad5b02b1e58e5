//! In-memory settings backend.
//!
//! Used when no MongoDB URI is configured. Records live as long as the
//! process does.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::database::{ChatSettings, SettingsBackend, StoreError};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: DashMap<i64, ChatSettings>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn load(&self, chat_id: i64) -> Result<Option<ChatSettings>, StoreError> {
        Ok(self.records.get(&chat_id).map(|r| r.value().clone()))
    }

    async fn save(&self, chat_id: i64, settings: &ChatSettings) -> Result<(), StoreError> {
        self.records.insert(chat_id, settings.clone());
        Ok(())
    }
}
