use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub role: ChatRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub user_id: i64,
    pub message: String,
    pub role: ChatRole,
    pub created_at: DateTime<Utc>,
}

impl NewChatMessage {
    pub fn now(user_id: i64, role: ChatRole, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
            role,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn into_message(self, id: i64) -> ChatMessage {
        ChatMessage {
            id,
            user_id: self.user_id,
            message: self.message,
            role: self.role,
            created_at: self.created_at,
        }
    }
}
