//! Moderation intents: what the core wants done, not how.

/// An action for the platform API collaborator to perform in the event's chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationIntent {
    None,
    SendMessage { text: String, reply_to: Option<i32> },
    DeleteMessage { message_id: i32 },
    /// Revoke send permissions until the given epoch second.
    RestrictUser { user_id: u64, until: i64 },
    BanUser { user_id: u64 },
    UnbanUser { user_id: u64 },
}

impl ModerationIntent {
    pub fn send(text: impl Into<String>) -> Self {
        Self::SendMessage {
            text: text.into(),
            reply_to: None,
        }
    }

    pub fn reply(text: impl Into<String>, message_id: i32) -> Self {
        Self::SendMessage {
            text: text.into(),
            reply_to: Some(message_id),
        }
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SendMessage { .. } => "send_message",
            Self::DeleteMessage { .. } => "delete_message",
            Self::RestrictUser { .. } => "restrict_user",
            Self::BanUser { .. } => "ban_user",
            Self::UnbanUser { .. } => "unban_user",
        }
    }
}
