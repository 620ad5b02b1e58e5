//! Carries out moderation intents through the Bot API.

use teloxide::prelude::*;
use teloxide::types::{ChatPermissions, MessageId, ReplyParameters};
use tracing::{debug, warn};

use super::dispatcher::ThrottledBot;
use crate::moderation::ModerationIntent;

/// Executes intents in order. A failed call is logged and the rest still run.
#[derive(Clone)]
pub struct IntentExecutor {
    bot: ThrottledBot,
}

impl IntentExecutor {
    pub fn new(bot: ThrottledBot) -> Self {
        Self { bot }
    }

    pub async fn execute(&self, chat_id: i64, intents: &[ModerationIntent]) {
        for intent in intents {
            if let Err(e) = self.apply(ChatId(chat_id), intent).await {
                warn!(chat_id, kind = intent.kind(), "Intent failed: {}", e);
            }
        }
    }

    async fn apply(&self, chat_id: ChatId, intent: &ModerationIntent) -> Result<(), teloxide::RequestError> {
        match intent {
            ModerationIntent::None => return Ok(()),
            ModerationIntent::SendMessage { text, reply_to } => {
                let mut req = self.bot.send_message(chat_id, text.clone());
                if let Some(id) = reply_to {
                    req = req.reply_parameters(ReplyParameters::new(MessageId(*id)));
                }
                req.await?;
            }
            ModerationIntent::DeleteMessage { message_id } => {
                self.bot.delete_message(chat_id, MessageId(*message_id)).await?;
            }
            ModerationIntent::RestrictUser { user_id, until } => {
                let mut req = self
                    .bot
                    .restrict_chat_member(chat_id, UserId(*user_id), ChatPermissions::empty());
                if let Some(until) = chrono::DateTime::from_timestamp(*until, 0) {
                    req = req.until_date(until);
                }
                req.await?;
            }
            ModerationIntent::BanUser { user_id } => {
                self.bot.ban_chat_member(chat_id, UserId(*user_id)).await?;
            }
            ModerationIntent::UnbanUser { user_id } => {
                self.bot.unban_chat_member(chat_id, UserId(*user_id)).await?;
            }
        }
        debug!(chat_id = chat_id.0, kind = intent.kind(), "Intent executed");
        Ok(())
    }
}
