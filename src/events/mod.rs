//! Message-level checks run by the moderator.
//!
//! Each check is a plain function or small state object returning a
//! verdict. The moderator turns verdicts into intents.

pub mod antiflood;
pub mod filters;
pub mod welcome;

pub use antiflood::{FloodCheck, FloodDetector};
pub use filters::{Violation, evaluate};
pub use welcome::welcome_intents;
