//! Command handlers.
//!
//! Add a command by:
//! 1. Writing a handler in the matching file (or a new one)
//! 2. Adding a row to [`COMMANDS`]
//!
//! Handlers are pure: they read the current settings and return either
//! intents or a new settings record. [`CommandDispatcher`] does the
//! privilege check, the store write and the usage replies.

pub mod antiflood;
pub mod ban;
pub mod links;
pub mod mute;
pub mod settings;
pub mod start;
pub mod welcome;
pub mod words;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::database::{ChatSettings, SettingsStore};
use crate::i18n::get_text;
use crate::moderation::{ModerationIntent, TextMessage};
use crate::permissions::AdminCache;
use crate::utils::CommandInvocation;

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Anyone,
    Admin,
}

/// Everything a handler may look at.
#[derive(Debug)]
pub struct CommandContext<'a> {
    pub message_id: i32,
    pub reply_to_user: Option<u64>,
    pub args: &'a str,
    pub settings: &'a ChatSettings,
    pub now_secs: i64,
    pub locale: &'a str,
}

impl CommandContext<'_> {
    pub fn text(&self, key: &str) -> String {
        get_text(self.locale, key)
    }
}

/// What a handler wants to happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Emit these intents as-is.
    Intents(Vec<ModerationIntent>),
    /// Write the record back, then send the confirmation if the write worked.
    Update {
        settings: ChatSettings,
        confirmation: String,
    },
}

/// Malformed command arguments. Each variant carries the i18n key of the
/// usage hint to show.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("missing argument")]
    MissingArgument { usage: &'static str },

    #[error("missing reply target")]
    MissingTarget { usage: &'static str },

    #[error("invalid argument {value:?}")]
    InvalidArgument { usage: &'static str, value: String },
}

impl CommandError {
    pub fn usage_key(&self) -> &'static str {
        match self {
            Self::MissingArgument { usage }
            | Self::MissingTarget { usage }
            | Self::InvalidArgument { usage, .. } => *usage,
        }
    }
}

pub type CommandHandler = fn(&CommandContext<'_>) -> Result<CommandOutcome, CommandError>;

/// One row of the command table.
pub struct CommandEntry {
    pub name: &'static str,
    pub privilege: Privilege,
    pub handler: CommandHandler,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("privilege", &self.privilege)
            .finish()
    }
}

/// All bot commands.
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry { name: "start", privilege: Privilege::Anyone, handler: start::start },
    CommandEntry { name: "help", privilege: Privilege::Anyone, handler: start::start },
    CommandEntry { name: "settings", privilege: Privilege::Anyone, handler: settings::show },
    CommandEntry { name: "setwelcome", privilege: Privilege::Admin, handler: welcome::set_welcome },
    CommandEntry { name: "locklinks", privilege: Privilege::Admin, handler: links::lock },
    CommandEntry { name: "unlocklinks", privilege: Privilege::Admin, handler: links::unlock },
    CommandEntry { name: "addword", privilege: Privilege::Admin, handler: words::add },
    CommandEntry { name: "delword", privilege: Privilege::Admin, handler: words::delete },
    CommandEntry { name: "listwords", privilege: Privilege::Anyone, handler: words::list },
    CommandEntry { name: "setflood", privilege: Privilege::Admin, handler: antiflood::set_flood },
    CommandEntry { name: "setautomute", privilege: Privilege::Admin, handler: antiflood::set_automute },
    CommandEntry { name: "mute", privilege: Privilege::Admin, handler: mute::mute },
    CommandEntry { name: "ban", privilege: Privilege::Admin, handler: ban::ban },
    CommandEntry { name: "unban", privilege: Privilege::Admin, handler: ban::unban },
];

/// Look up a command by its parsed (lower-cased) name.
pub fn find(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

/// Runs recognized commands against a chat's settings.
#[derive(Clone)]
pub struct CommandDispatcher {
    store: SettingsStore,
    admins: AdminCache,
    clock: Arc<dyn Clock>,
    locale: Arc<str>,
}

impl CommandDispatcher {
    pub fn new(store: SettingsStore, admins: AdminCache, clock: Arc<dyn Clock>, locale: &str) -> Self {
        Self {
            store,
            admins,
            clock,
            locale: locale.into(),
        }
    }

    /// Run one command. Privilege is checked before arguments.
    pub async fn dispatch(
        &self,
        entry: &CommandEntry,
        invocation: &CommandInvocation,
        msg: &TextMessage,
    ) -> Vec<ModerationIntent> {
        let chat_id = msg.chat_id;

        if entry.privilege == Privilege::Admin && !self.admins.is_admin(chat_id, msg.sender_id).await {
            debug!("User {} denied /{} in chat {}", msg.sender_id, entry.name, chat_id);
            return vec![ModerationIntent::reply(
                get_text(&self.locale, "common.admins_only"),
                msg.message_id,
            )];
        }

        // A record that failed to load must not be written back over the stored one.
        let (settings, loaded) = match self.store.load(chat_id).await {
            Ok(settings) => (settings, true),
            Err(e) => {
                warn!("Settings for chat {} unavailable during /{}: {}", chat_id, entry.name, e);
                (self.store.defaults().clone(), false)
            }
        };
        let ctx = CommandContext {
            message_id: msg.message_id,
            reply_to_user: msg.reply_to_user,
            args: &invocation.args,
            settings: &settings,
            now_secs: self.clock.now_secs(),
            locale: &self.locale,
        };

        match (entry.handler)(&ctx) {
            Ok(CommandOutcome::Intents(intents)) => intents,
            Ok(CommandOutcome::Update { .. }) if !loaded => {
                warn!("/{} not applied in chat {}: settings could not be read", entry.name, chat_id);
                Vec::new()
            }
            Ok(CommandOutcome::Update { settings, confirmation }) => {
                match self.store.put(chat_id, &settings).await {
                    Ok(()) => {
                        info!("/{} updated settings for chat {}", entry.name, chat_id);
                        vec![ModerationIntent::send(confirmation)]
                    }
                    Err(e) => {
                        warn!("/{} not confirmed in chat {}: {}", entry.name, chat_id, e);
                        Vec::new()
                    }
                }
            }
            Err(e) => {
                debug!("/{} rejected in chat {}: {}", entry.name, chat_id, e);
                let usage = get_text(&self.locale, "common.usage")
                    .replace("{usage}", &get_text(&self.locale, e.usage_key()));
                vec![ModerationIntent::reply(usage, msg.message_id)]
            }
        }
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
