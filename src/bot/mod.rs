//! Bot module - Telegram transport around the moderation core.

pub mod dispatcher;
mod executor;
mod lookup;
mod runtime;
pub mod webhook;

pub use dispatcher::{ThrottledBot, build_dispatcher, message_event};
pub use executor::IntentExecutor;
pub use lookup::TelegramLookup;
pub use runtime::run;
