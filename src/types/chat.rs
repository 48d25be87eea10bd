//! Advisory chat transcript types: ChatMessage, ChatRole

use serde::{Deserialize, Serialize};

/// Author of a chat transcript turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatRole {
    /// Farm operator
    User,
    /// Advisory model
    Advisor,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Advisor => write!(f, "advisor"),
        }
    }
}

/// One turn in the advisory conversation.
///
/// The transcript is append-only: messages are never mutated or deleted.
/// `is_error` marks advisory turns that carry the fallback text instead of
/// a real model response, so the UI can render them distinctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Unique identifier, assigned at creation
    pub id: u64,
    /// Message author
    pub role: ChatRole,
    /// Message text (advisory text is opaque and untrusted)
    pub text: String,
    /// True when the text is a fallback/error placeholder
    #[serde(default)]
    pub is_error: bool,
}
