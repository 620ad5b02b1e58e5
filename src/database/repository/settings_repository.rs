//! Chat settings repository.
//!
//! `get` never fails the caller: a missing record or a backend error both
//! yield defaults. `load` reports backend errors so a command never writes
//! back a record it could not read. Writes report failure so commands can
//! withhold their confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cache::{CacheConfig, TypedCache};
use crate::database::{ChatSettings, StoreError};

/// Persistence contract for whole settings records.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Load the stored record, `None` if the chat has never been written.
    async fn load(&self, chat_id: i64) -> Result<Option<ChatSettings>, StoreError>;

    /// Replace the stored record (upsert).
    async fn save(&self, chat_id: i64, settings: &ChatSettings) -> Result<(), StoreError>;
}

/// Settings store adapter with a Moka read cache in front of the backend.
#[derive(Clone)]
pub struct SettingsStore {
    backend: Arc<dyn SettingsBackend>,
    cache: TypedCache<i64, ChatSettings>,
    /// Record for chats that have never been written.
    defaults: ChatSettings,
}

impl SettingsStore {
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self {
            backend,
            cache: TypedCache::new("chat_settings", CacheConfig::chat_settings()),
            defaults: ChatSettings::default(),
        }
    }

    /// Use `defaults` for chats without a stored record.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ChatSettings) -> Self {
        self.defaults = defaults;
        self
    }

    /// Record used for chats with nothing stored.
    pub fn defaults(&self) -> &ChatSettings {
        &self.defaults
    }

    /// Current settings for a chat, or defaults if absent.
    ///
    /// # Errors
    /// Returns the backend error when the record could not be read.
    pub async fn load(&self, chat_id: i64) -> Result<ChatSettings, StoreError> {
        if let Some(settings) = self.cache.get(&chat_id) {
            return Ok(settings);
        }

        let found = self.backend.load(chat_id).await?;
        debug!("Loaded settings for chat {} (stored: {})", chat_id, found.is_some());
        let settings = found.unwrap_or_else(|| self.defaults.clone());
        self.cache.insert(chat_id, settings.clone());
        Ok(settings)
    }

    /// Current settings for a chat. Backend errors fold to defaults.
    pub async fn get(&self, chat_id: i64) -> ChatSettings {
        match self.load(chat_id).await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings for chat {}, using defaults: {}", chat_id, e);
                self.defaults.clone()
            }
        }
    }

    /// Write back a whole settings record.
    pub async fn put(&self, chat_id: i64, settings: &ChatSettings) -> Result<(), StoreError> {
        match self.backend.save(chat_id, settings).await {
            Ok(()) => {
                self.cache.insert(chat_id, settings.clone());
                debug!("Saved settings for chat {}", chat_id);
                Ok(())
            }
            Err(e) => {
                // Next read goes back to the backend.
                self.cache.invalidate(&chat_id);
                warn!("Failed to save settings for chat {}: {}", chat_id, e);
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
