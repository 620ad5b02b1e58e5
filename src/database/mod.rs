//! Settings persistence.
//!
//! `SettingsStore` is what the moderation core talks to. It sits on top of
//! a pluggable [`SettingsBackend`]: MongoDB in production, or an in-memory
//! map when no database is configured.

mod error;
mod memory;
pub mod models;
mod mongo;
mod repository;

pub use error::StoreError;
pub use memory::MemoryBackend;
pub use models::ChatSettings;
pub use mongo::{Database, MongoSettingsBackend};
pub use repository::{SettingsBackend, SettingsStore};
