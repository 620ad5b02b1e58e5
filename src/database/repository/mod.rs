//! Repository module - data access with read caching.

mod settings_repository;

pub use settings_repository::{SettingsBackend, SettingsStore};
