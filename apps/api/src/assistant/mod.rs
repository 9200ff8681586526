//! Job-search assistant: pluggable, trait-based advice backend.
//!
//! `CannedAdvisor` answers from keyword-matched canned replies and needs no
//! network. `LlmAdvisor` delegates to the chat-completions API through
//! `LlmClient`. `AppState` holds an `Arc<dyn AdviceService>` chosen at startup.
//!
//! Callers never see an error: live failures degrade to a fixed apology.

pub mod prompts;

use async_trait::async_trait;
use tracing::error;

use crate::llm_client::{LlmClient, LlmError, LlmMessage};
use crate::models::{ChatMessage, ChatRole};

#[async_trait]
pub trait AdviceService: Send + Sync {
    /// Reply to `message` given the conversation so far (oldest first).
    async fn reply(&self, history: &[ChatMessage], message: &str) -> String;

    /// Suggest roles that fit a set of skills and a preferred location.
    async fn job_suggestions(&self, skills: &[String], location: &str) -> String;

    /// Short label for logs and health output.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// CannedAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct CannedAdvisor;

#[async_trait]
impl AdviceService for CannedAdvisor {
    async fn reply(&self, _history: &[ChatMessage], message: &str) -> String {
        canned_reply(message).to_string()
    }

    async fn job_suggestions(&self, _skills: &[String], _location: &str) -> String {
        prompts::CANNED_SUGGESTIONS.to_string()
    }

    fn backend(&self) -> &'static str {
        "canned"
    }
}

fn canned_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    prompts::KEYWORD_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(prompts::DEFAULT_REPLY)
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAdvisor(pub LlmClient);

#[async_trait]
impl AdviceService for LlmAdvisor {
    async fn reply(&self, history: &[ChatMessage], message: &str) -> String {
        let conversation = build_conversation(history, message);
        match self.0.complete(&conversation).await {
            Ok(text) => text,
            Err(LlmError::EmptyContent) => prompts::EMPTY_REPLY.to_string(),
            Err(e) => {
                error!("Error getting AI response: {e}");
                prompts::APOLOGY_REPLY.to_string()
            }
        }
    }

    async fn job_suggestions(&self, skills: &[String], location: &str) -> String {
        let conversation = [
            LlmMessage::system(prompts::SYSTEM_PROMPT),
            LlmMessage::user(prompts::build_suggestions_prompt(skills, location)),
        ];
        match self.0.complete(&conversation).await {
            Ok(text) => text,
            Err(LlmError::EmptyContent) => prompts::SUGGESTIONS_EMPTY.to_string(),
            Err(e) => {
                error!("Error generating job suggestions: {e}");
                prompts::SUGGESTIONS_APOLOGY.to_string()
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// System prompt, then the stored history. The chat route persists the new
/// user message before asking for a reply, so it is appended only when the
/// history does not already end with it.
fn build_conversation(history: &[ChatMessage], message: &str) -> Vec<LlmMessage> {
    let mut conversation = Vec::with_capacity(history.len() + 2);
    conversation.push(LlmMessage::system(prompts::SYSTEM_PROMPT));
    conversation.extend(history.iter().map(|m| match m.role {
        ChatRole::User => LlmMessage::user(m.message.as_str()),
        ChatRole::Assistant => LlmMessage::assistant(m.message.as_str()),
    }));

    let already_last = history
        .last()
        .is_some_and(|m| m.role == ChatRole::User && m.message == message);
    if !already_last {
        conversation.push(LlmMessage::user(message));
    }
    conversation
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn message(id: i64, role: ChatRole, text: &str) -> ChatMessage {
        ChatMessage {
            id,
            user_id: 1,
            message: text.to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_canned_reply_keyword_routing() {
        assert_eq!(canned_reply("Can you look at my CV?"), prompts::RESUME_REPLY);
        assert_eq!(canned_reply("How do I PREPARE?"), prompts::INTERVIEW_REPLY);
        assert_eq!(
            canned_reply("help me write a cover letter"),
            prompts::COVER_LETTER_REPLY
        );
        assert_eq!(canned_reply("I got rejected again"), prompts::REJECTION_REPLY);
        assert_eq!(canned_reply("hello"), prompts::DEFAULT_REPLY);
    }

    #[test]
    fn test_canned_reply_first_group_wins() {
        // mentions both resume and interview
        assert_eq!(
            canned_reply("resume tips before my interview"),
            prompts::RESUME_REPLY
        );
    }

    #[tokio::test]
    async fn test_canned_advisor_ignores_history() {
        let history = vec![message(1, ChatRole::User, "resume")];
        let reply = CannedAdvisor.reply(&history, "hi").await;
        assert_eq!(reply, prompts::DEFAULT_REPLY);
        assert_eq!(CannedAdvisor.backend(), "canned");
        assert_eq!(
            CannedAdvisor.job_suggestions(&["Rust".to_string()], "Berlin").await,
            prompts::CANNED_SUGGESTIONS
        );
    }

    #[test]
    fn test_build_conversation_maps_roles() {
        let history = vec![
            message(1, ChatRole::Assistant, "Hello!"),
            message(2, ChatRole::User, "Help with my resume"),
        ];
        let conversation = build_conversation(&history, "Help with my resume");
        let roles: Vec<&str> = conversation.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec!["system", "assistant", "user"]);
        assert_eq!(conversation[0].content, prompts::SYSTEM_PROMPT);
    }

    #[test]
    fn test_build_conversation_appends_new_message() {
        let history = vec![message(1, ChatRole::Assistant, "Hello!")];
        let conversation = build_conversation(&history, "next question");
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation[2], LlmMessage::user("next question"));
    }

    #[tokio::test]
    async fn test_llm_advisor_degrades_to_apology() {
        // nothing listens on port 9 of the loopback interface
        let client = LlmClient::new(
            "key".to_string(),
            "http://127.0.0.1:9",
            "gpt-4o",
            Duration::from_secs(2),
        )
        .unwrap();
        let advisor = LlmAdvisor(client);

        assert_eq!(advisor.reply(&[], "hello").await, prompts::APOLOGY_REPLY);
        assert_eq!(
            advisor.job_suggestions(&["Rust".to_string()], "Remote").await,
            prompts::SUGGESTIONS_APOLOGY
        );
        assert_eq!(advisor.backend(), "llm");
    }
}
