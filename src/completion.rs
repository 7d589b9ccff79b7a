use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::{timeout, Duration};

use crate::config::AppConfig;

pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 2500;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("completion request timed out")]
    Timeout,
    #[error("failed to reach completion API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("malformed completion response: {0}")]
    Decode(String),
}

/// Submit a prompt, receive generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Chat-completions client for OpenAI and API-compatible servers.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    url: String,
    model: String,
    timeout_ms: Option<u64>,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        timeout_ms: Option<u64>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            &config.base_url,
            config.model.clone(),
            config.timeout_ms,
        )
    }

    async fn send(&self, body: &ChatRequest<'_>) -> Result<(StatusCode, String), CompletionError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
        if self.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        tracing::debug!(model = %self.model, url = %self.url, "sending chat completion");

        let (status, text) = match self.timeout_ms {
            Some(ms) => timeout(Duration::from_millis(ms), self.send(&body))
                .await
                .map_err(|_| CompletionError::Timeout)??,
            None => self.send(&body).await?,
        };

        if !status.is_success() {
            return Err(CompletionError::Upstream {
                status,
                message: upstream_message(&text),
            });
        }

        parse_completion(&text)
    }
}

/// First choice's message text; absent choices or null content give an empty string.
fn parse_completion(raw: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse =
        serde_json::from_str(raw).map_err(|e| CompletionError::Decode(e.to_string()))?;
    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default())
}

fn upstream_message(raw: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(raw)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| raw.trim().to_string())
}
