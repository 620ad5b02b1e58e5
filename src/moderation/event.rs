//! Normalized inbound events.
//!
//! The transport turns raw updates into these before the moderation core
//! sees them.

/// Kind of chat an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    /// Groups and supergroups, where moderation applies.
    pub fn is_multi_user(self) -> bool {
        matches!(self, Self::Group | Self::Supergroup)
    }
}

/// A member who just joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub user_id: u64,
    pub first_name: String,
}

/// One or more users joined a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipJoin {
    pub chat_id: i64,
    pub members: Vec<NewMember>,
}

/// A message (or edited message) with a known sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub chat_id: i64,
    pub chat_kind: ChatKind,
    pub message_id: i32,
    pub sender_id: u64,
    pub text: Option<String>,
    pub caption: Option<String>,
    /// The platform attached entities (links, mentions, formatting...).
    pub has_rich_entities: bool,
    /// Author of the message this one replies to.
    pub reply_to_user: Option<u64>,
}

impl TextMessage {
    /// Plain message in a chat, no caption, entities or reply.
    pub fn new(chat_id: i64, chat_kind: ChatKind, message_id: i32, sender_id: u64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            chat_kind,
            message_id,
            sender_id,
            text: Some(text.into()),
            caption: None,
            has_rich_entities: false,
            reply_to_user: None,
        }
    }

    #[must_use]
    pub fn replying_to(mut self, user_id: u64) -> Self {
        self.reply_to_user = Some(user_id);
        self
    }

    #[must_use]
    pub fn with_entities(mut self) -> Self {
        self.has_rich_entities = true;
        self
    }
}

/// Everything the moderation pipeline can be handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MembershipJoin(MembershipJoin),
    TextMessage(TextMessage),
    Other,
}

impl Event {
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            Self::MembershipJoin(join) => Some(join.chat_id),
            Self::TextMessage(msg) => Some(msg.chat_id),
            Self::Other => None,
        }
    }
}
