//! Message dispatcher setup.
//!
//! Normalizes incoming messages into moderation events and hands the
//! resulting intents to the executor.

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::debug;

use super::executor::IntentExecutor;
use crate::moderation::{ChatKind, Event, MembershipJoin, Moderator, NewMember, TextMessage};

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Build the dispatcher over a ready moderator.
pub fn build_dispatcher(
    bot: ThrottledBot,
    moderator: Moderator,
) -> Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey> {
    let executor = IntentExecutor::new(bot.clone());

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![moderator, executor])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema. Edited messages go through the same pipeline.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(Update::filter_message().endpoint(moderate))
        .branch(Update::filter_edited_message().endpoint(moderate))
}

async fn moderate(msg: Message, moderator: Moderator, executor: IntentExecutor) -> anyhow::Result<()> {
    let event = message_event(&msg);
    let Some(chat_id) = event.chat_id() else {
        return Ok(());
    };

    let intents = moderator.handle(&event).await;
    if intents.is_empty() {
        return Ok(());
    }

    debug!("{} intent(s) for chat {}", intents.len(), chat_id);
    executor.execute(chat_id, &intents).await;
    Ok(())
}

fn chat_kind(msg: &Message) -> ChatKind {
    if msg.chat.is_private() {
        ChatKind::Private
    } else if msg.chat.is_group() {
        ChatKind::Group
    } else if msg.chat.is_supergroup() {
        ChatKind::Supergroup
    } else {
        ChatKind::Channel
    }
}

/// Turn a Telegram message into an event the moderator understands.
///
/// Service messages announcing new members become joins. Messages without
/// a sender (channel posts, anonymous admins) are `Event::Other`.
pub fn message_event(msg: &Message) -> Event {
    if let Some(users) = msg.new_chat_members()
        && !users.is_empty()
    {
        return Event::MembershipJoin(MembershipJoin {
            chat_id: msg.chat.id.0,
            members: users
                .iter()
                .map(|u| NewMember {
                    user_id: u.id.0,
                    first_name: u.first_name.clone(),
                })
                .collect(),
        });
    }

    let Some(sender) = msg.from.as_ref() else {
        return Event::Other;
    };

    let has_entities = |e: Option<&[teloxide::types::MessageEntity]>| e.is_some_and(|e| !e.is_empty());

    Event::TextMessage(TextMessage {
        chat_id: msg.chat.id.0,
        chat_kind: chat_kind(msg),
        message_id: msg.id.0,
        sender_id: sender.id.0,
        text: msg.text().map(str::to_string),
        caption: msg.caption().map(str::to_string),
        has_rich_entities: has_entities(msg.entities()) || has_entities(msg.caption_entities()),
        reply_to_user: msg
            .reply_to_message()
            .and_then(|reply| reply.from.as_ref())
            .map(|user| user.id.0),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn message(value: serde_json::Value) -> Message {
        serde_json::from_value(value).unwrap()
    }

    fn supergroup() -> serde_json::Value {
        json!({"id": -1001, "type": "supergroup", "title": "Test group"})
    }

    fn user(id: u64, name: &str) -> serde_json::Value {
        json!({"id": id, "is_bot": false, "first_name": name})
    }

    #[test]
    fn text_message_with_reply_and_entities() {
        let msg = message(json!({
            "message_id": 20,
            "date": 1_700_000_000,
            "chat": supergroup(),
            "from": user(42, "Ann"),
            "text": "see https://example.com",
            "entities": [{"type": "url", "offset": 4, "length": 19}],
            "reply_to_message": {
                "message_id": 19,
                "date": 1_699_999_990,
                "chat": supergroup(),
                "from": user(7, "Bob"),
                "text": "hi"
            }
        }));

        let Event::TextMessage(text) = message_event(&msg) else {
            panic!("expected a text message");
        };
        assert_eq!(text.chat_id, -1001);
        assert_eq!(text.chat_kind, ChatKind::Supergroup);
        assert_eq!(text.message_id, 20);
        assert_eq!(text.sender_id, 42);
        assert_eq!(text.text.as_deref(), Some("see https://example.com"));
        assert!(text.has_rich_entities);
        assert_eq!(text.reply_to_user, Some(7));
    }

    #[test]
    fn private_plain_message() {
        let msg = message(json!({
            "message_id": 1,
            "date": 1_700_000_000,
            "chat": {"id": 42, "type": "private", "first_name": "Ann"},
            "from": user(42, "Ann"),
            "text": "/start"
        }));

        let Event::TextMessage(text) = message_event(&msg) else {
            panic!("expected a text message");
        };
        assert_eq!(text.chat_kind, ChatKind::Private);
        assert!(!text.has_rich_entities);
        assert_eq!(text.reply_to_user, None);
    }

    #[test]
    fn new_members_become_a_join() {
        let msg = message(json!({
            "message_id": 3,
            "date": 1_700_000_000,
            "chat": supergroup(),
            "from": user(42, "Ann"),
            "new_chat_members": [user(7, "Bob"), user(8, "Cy")]
        }));

        assert_eq!(
            message_event(&msg),
            Event::MembershipJoin(MembershipJoin {
                chat_id: -1001,
                members: vec![
                    NewMember { user_id: 7, first_name: "Bob".into() },
                    NewMember { user_id: 8, first_name: "Cy".into() },
                ],
            })
        );
    }

    #[test]
    fn sender_less_message_is_other() {
        let msg = message(json!({
            "message_id": 4,
            "date": 1_700_000_000,
            "chat": supergroup(),
            "sender_chat": supergroup(),
            "text": "posted as the group"
        }));

        assert_eq!(message_event(&msg), Event::Other);
    }
}
