#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

impl Origin {
    /// CSS modifier used by the transcript view.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single transcript entry. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationMessage {
    id: u64,
    origin: Origin,
    text: String,
}

impl ConversationMessage {
    pub(crate) fn new(id: u64, origin: Origin, text: impl Into<String>) -> Self {
        Self { id, origin, text: text.into() }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}
