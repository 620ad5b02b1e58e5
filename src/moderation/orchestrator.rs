//! Per-event decision pipeline.

use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::database::SettingsStore;
use crate::events::{self, FloodDetector, Violation};
use crate::i18n::get_text;
use crate::moderation::{Event, ModerationIntent, TextMessage};
use crate::permissions::AdminCache;
use crate::plugins::{self, CommandDispatcher};
use crate::utils::parse_command;

/// Sequences welcome, commands, content filter and antiflood.
///
/// Cheap to clone; all state lives in the injected store and caches.
#[derive(Clone, Debug)]
pub struct Moderator {
    store: SettingsStore,
    admins: AdminCache,
    flood: FloodDetector,
    commands: CommandDispatcher,
    clock: Arc<dyn Clock>,
    locale: Arc<str>,
}

impl Moderator {
    pub fn new(
        store: SettingsStore,
        admins: AdminCache,
        flood: FloodDetector,
        clock: Arc<dyn Clock>,
        locale: &str,
    ) -> Self {
        let commands = CommandDispatcher::new(store.clone(), admins.clone(), clock.clone(), locale);
        Self {
            store,
            admins,
            flood,
            commands,
            clock,
            locale: locale.into(),
        }
    }

    /// Decide what to do about one event.
    ///
    /// Order: joins get welcomed, recognized commands in groups go to the
    /// dispatcher, then non-admin group messages pass the content filter
    /// and the flood check. The first rule that fires ends processing.
    pub async fn handle(&self, event: &Event) -> Vec<ModerationIntent> {
        match event {
            Event::MembershipJoin(join) => {
                let settings = self.store.get(join.chat_id).await;
                debug!("Welcoming {} member(s) in chat {}", join.members.len(), join.chat_id);
                events::welcome_intents(join, &settings, &self.locale)
            }
            Event::TextMessage(msg) => self.handle_message(msg).await,
            Event::Other => Vec::new(),
        }
    }

    async fn handle_message(&self, msg: &TextMessage) -> Vec<ModerationIntent> {
        if !msg.chat_kind.is_multi_user() {
            return Vec::new();
        }

        if let Some(text) = msg.text.as_deref()
            && let Some(invocation) = parse_command(text)
            && let Some(entry) = plugins::find(&invocation.name)
        {
            debug!("Command /{} from {} in chat {}", entry.name, msg.sender_id, msg.chat_id);
            return self.commands.dispatch(entry, &invocation, msg).await;
        }

        // Admins are exempt from filters and antiflood
        if self.admins.is_admin(msg.chat_id, msg.sender_id).await {
            return Vec::new();
        }

        let settings = self.store.get(msg.chat_id).await;

        if let Some(violation) = events::evaluate(
            msg.text.as_deref(),
            msg.caption.as_deref(),
            msg.has_rich_entities,
            &settings,
        ) {
            info!(
                "Deleting message {} from {} in chat {}: {:?}",
                msg.message_id, msg.sender_id, msg.chat_id, violation
            );
            let key = match violation {
                Violation::BannedWord => "filters.banned_word",
                Violation::LinkPolicy => "filters.link",
            };
            return vec![
                ModerationIntent::DeleteMessage {
                    message_id: msg.message_id,
                },
                ModerationIntent::send(get_text(&self.locale, key)),
            ];
        }

        let now = self.clock.now_millis();
        let check = self.flood.check(msg.chat_id, msg.sender_id, &settings, now);
        if !check.within_limit {
            info!(
                "Muting {} in chat {} for {}s (flood)",
                msg.sender_id, msg.chat_id, settings.auto_mute_secs
            );
            return vec![
                ModerationIntent::RestrictUser {
                    user_id: msg.sender_id,
                    until: now.div_euclid(1000) + i64::from(settings.auto_mute_secs),
                },
                ModerationIntent::send(
                    get_text(&self.locale, "antiflood.muted")
                        .replace("{seconds}", &settings.auto_mute_secs.to_string()),
                ),
            ];
        }

        Vec::new()
    }
}
