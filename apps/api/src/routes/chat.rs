use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FieldError};
use crate::models::{ChatMessage, ChatRole, NewChatMessage};
use crate::routes::extract::{CurrentUser, ValidJson};
use crate::state::AppState;

const MAX_MESSAGE_CHARS: usize = 1000;
const DEFAULT_LOCATION: &str = "any location";

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: Option<String>,
}

impl SendMessageRequest {
    pub fn validate(self) -> Result<String, AppError> {
        let message = self.message.unwrap_or_default();
        let problem = match message.chars().count() {
            0 => Some("Message cannot be empty".to_string()),
            n if n > MAX_MESSAGE_CHARS => Some(format!(
                "Message exceeds maximum length of {MAX_MESSAGE_CHARS} characters"
            )),
            _ => None,
        };
        match problem {
            Some(reason) => Err(AppError::validation(
                "Invalid message",
                vec![FieldError::new("message", reason)],
            )),
            None => Ok(message),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct JobSuggestionsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobSuggestionsResponse {
    pub suggestions: String,
}

/// GET /api/chat
pub async fn handle_chat_history(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<Vec<ChatMessage>> {
    Json(state.storage.get_chat_messages(user.id).await)
}

/// POST /api/chat
///
/// Stores the user's message, asks the advisor with the full history, stores the reply.
pub async fn handle_send_message(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidJson(request): ValidJson<SendMessageRequest>,
) -> Result<Json<ChatExchange>, AppError> {
    let message = request.validate()?;

    let user_message = state
        .storage
        .create_chat_message(NewChatMessage::now(user.id, ChatRole::User, message.as_str()))
        .await;

    let history = state.storage.get_chat_messages(user.id).await;
    let reply = state.advisor.reply(&history, &message).await;

    let assistant_message = state
        .storage
        .create_chat_message(NewChatMessage::now(user.id, ChatRole::Assistant, reply))
        .await;

    Ok(Json(ChatExchange {
        user_message,
        assistant_message,
    }))
}

/// POST /api/assistant/job-suggestions
pub async fn handle_job_suggestions(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<JobSuggestionsRequest>,
) -> Result<Json<JobSuggestionsResponse>, AppError> {
    let skills: Vec<String> = request
        .skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if skills.is_empty() {
        return Err(AppError::validation(
            "Invalid suggestion request",
            vec![FieldError::new("skills", "At least one skill is required")],
        ));
    }

    let location = request
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let suggestions = state.advisor.job_suggestions(&skills, &location).await;
    Ok(Json(JobSuggestionsResponse { suggestions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_length_bounds() {
        let at_limit = "a".repeat(MAX_MESSAGE_CHARS);
        assert!(SendMessageRequest {
            message: Some(at_limit)
        }
        .validate()
        .is_ok());

        let over = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(SendMessageRequest {
            message: Some(over)
        }
        .validate()
        .is_err());

        assert!(SendMessageRequest { message: None }.validate().is_err());
    }

    #[test]
    fn test_message_length_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(SendMessageRequest {
            message: Some(accented)
        }
        .validate()
        .is_ok());
    }
}
