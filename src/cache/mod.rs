//! Cache module - thin typed wrappers around Moka.
//!
//! Caches are created by their owners (admin cache, settings store) and
//! injected where needed, never held as process globals.
//!
//! ```rust,ignore
//! let cache: TypedCache<(i64, u64), AdminEntry> =
//!     TypedCache::new("admin_status", CacheConfig::admin_status());
//! cache.insert((chat_id, user_id), entry);
//! ```

mod config;
mod typed;

pub use config::CacheConfig;
pub use typed::TypedCache;
