use serde::{Deserialize, Serialize};

/// A single turn of interview conversation.
///
/// The dialogue engine is stateless: the full history is supplied on each
/// call and retained by the caller, never by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
