//! Moderation core.
//!
//! [`Moderator::handle`] takes one normalized [`Event`] and returns the
//! [`ModerationIntent`]s to carry out. It never calls the chat platform
//! itself.

mod event;
mod intent;
mod orchestrator;

pub use event::{ChatKind, Event, MembershipJoin, NewMember, TextMessage};
pub use intent::ModerationIntent;
pub use orchestrator::Moderator;
