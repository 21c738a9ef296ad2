use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::core::AppConfig;

// Generation parameters are fixed for every practice turn
pub const MAX_TOKENS: u32 = 256;
pub const TEMPERATURE: f64 = 0.7;
pub const PRESENCE_PENALTY: f64 = 0.0;
pub const FREQUENCY_PENALTY: f64 = 0.2;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Failures from the chat completion provider, grouped by what the
/// caller can do about them.
#[derive(Debug, Error, PartialEq)]
pub enum CompletionError {
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error("invalid API key")]
    AuthenticationFailed,
    #[error("{0}")]
    Provider(String),
    #[error("{0}")]
    Unknown(String),
}

impl CompletionError {
    /// Classify a non-success response from the provider. The
    /// provider's own error message is preferred over the raw body.
    fn from_response(status: StatusCode, body: &str) -> Self {
        match status.as_u16() {
            429 => CompletionError::QuotaExceeded,
            401 => CompletionError::AuthenticationFailed,
            _ => {
                let message = serde_json::from_str::<ErrorResponse>(body)
                    .map(|resp| resp.error.message)
                    .unwrap_or_else(|_| format!("{}: {}", status, body));
                CompletionError::Provider(message)
            }
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Unknown(err.to_string())
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(err: serde_json::Error) -> Self {
        CompletionError::Unknown(err.to_string())
    }
}

// {
//     "error": {
//         "message": "You exceeded your current quota, ...",
//         "type": "insufficient_quota",
//         "param": null,
//         "code": "insufficient_quota"
//     }
// }
#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Thin client for an OpenAI compatible chat completions API. One
/// request per call, no retries.
#[derive(Clone, Debug)]
pub struct ModelGateway {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
}

impl ModelGateway {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.openai_api_hostname,
            &config.openai_api_key,
            &config.openai_model,
        )
    }

    /// Send the messages to the model and return the text of the
    /// reply.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "presence_penalty": PRESENCE_PENALTY,
            "frequency_penalty": FREQUENCY_PENALTY,
        });
        let url = format!(
            "{}/v1/chat/completions",
            self.api_hostname.trim_end_matches("/")
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::from_response(status, &body));
        }

        let resp: CompletionResponse = serde_json::from_str(&body)?;
        resp.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::Unknown(format!("No message received. Resp:\n\n {}", body))
            })
    }
}
