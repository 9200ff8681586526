/// LLM Client: the single point of entry for chat-completion calls.
///
/// No other module talks to the model provider directly; the live advice
/// backend wraps this client.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 800;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One turn of the conversation sent to the model.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LlmMessage {
    pub role: &'static str,
    pub content: String,
}

impl LlmMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [LlmMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Text of the first choice, if the model produced any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wraps the chat-completions endpoint. One request per call, no retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        api_base: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_base: api_base.into(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the conversation and returns the full response object.
    pub async fn call(&self, messages: &[LlmMessage]) -> Result<CompletionResponse, LlmError> {
        let request_body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = serde_json::from_str(&response.text().await?)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }

    /// Convenience wrapper returning only the reply text.
    pub async fn complete(&self, messages: &[LlmMessage]) -> Result<String, LlmError> {
        let response = self.call(messages).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base: String) -> LlmClient {
        LlmClient::new("test-key".to_string(), base, DEFAULT_MODEL, Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_text_skips_blank_content() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "   "}}]
        }))
        .unwrap();
        assert_eq!(response.text(), None);

        let response: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "Hi there"}}],
            "usage": {"prompt_tokens": 3, "completion_tokens": 2}
        }))
        .unwrap();
        assert_eq!(response.text(), Some("Hi there"));
    }

    #[tokio::test]
    async fn test_complete_sends_conversation_and_returns_text() {
        let router = Router::new().route(
            "/chat/completions",
            post(|Json(body): Json<Value>| async move {
                let turns = body["messages"].as_array().map(|m| m.len()).unwrap_or(0);
                Json(json!({
                    "choices": [{"message": {"content": format!("{} turns via {}", turns, body["model"].as_str().unwrap_or(""))}}]
                }))
            }),
        );
        let llm = client(spawn_stub(router).await);

        let reply = llm
            .complete(&[LlmMessage::system("be brief"), LlmMessage::user("hello")])
            .await
            .unwrap();
        assert_eq!(reply, "2 turns via gpt-4o");
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    axum::http::StatusCode::UNAUTHORIZED,
                    Json(json!({"error": {"message": "Incorrect API key provided"}})),
                )
            }),
        );
        let llm = client(spawn_stub(router).await);

        match llm.complete(&[LlmMessage::user("hello")]).await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choice_is_an_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let llm = client(spawn_stub(router).await);
        assert!(matches!(
            llm.complete(&[LlmMessage::user("hello")]).await,
            Err(LlmError::EmptyContent)
        ));
    }
}
