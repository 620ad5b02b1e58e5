//! Chat membership lookups against the Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatMember, ChatMemberKind};

use crate::permissions::{LookupError, MembershipLookup};

/// Resolves a user's status with `getChatMember`.
#[derive(Clone, Debug)]
pub struct TelegramLookup {
    bot: Bot,
}

impl TelegramLookup {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Bot API status string for a member.
fn status_of(member: &ChatMember) -> &'static str {
    match &member.kind {
        ChatMemberKind::Owner(_) => "creator",
        ChatMemberKind::Administrator(_) => "administrator",
        ChatMemberKind::Restricted(_) => "restricted",
        ChatMemberKind::Left => "left",
        ChatMemberKind::Banned(_) => "kicked",
        _ => "member",
    }
}

#[async_trait]
impl MembershipLookup for TelegramLookup {
    async fn lookup_membership(&self, chat_id: i64, user_id: u64) -> Result<String, LookupError> {
        let member = self.bot.get_chat_member(ChatId(chat_id), UserId(user_id)).await?;
        Ok(status_of(&member).to_string())
    }
}
