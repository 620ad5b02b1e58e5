//! Admin status lookups with time-bounded caching.
//!
//! The moderation core only needs one question answered: is this user
//! privileged in this chat? [`AdminCache`] answers it from a cache when it
//! can and asks a [`MembershipLookup`] when it can't.
//!
//! ```rust,ignore
//! let admins = AdminCache::new(lookup, clock, owner_ids);
//! if admins.is_admin(chat_id, user_id).await {
//!     // exempt from filters and antiflood
//! }
//! ```

mod checker;

pub use checker::{ADMIN_TTL_MILLIS, AdminCache, AdminEntry, LookupError, MembershipLookup, is_privileged_status};
