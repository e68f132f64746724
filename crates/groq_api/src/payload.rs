use serde::{Deserialize, Serialize};

use crate::error::GroqApiError;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

/// One OpenAI-compatible chat message in a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_SYSTEM.to_string(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: content.into(),
        }
    }
}

/// Canonical request payload shape for the chat-completions endpoint.
///
/// `stream` is always serialized as `false`: this transport speaks the
/// non-streaming request/response protocol only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            temperature: None,
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Assistant message carried inside a response choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatChoice {
    pub message: ChatCompletionMessage,
    pub finish_reason: Option<String>,
}

/// Subset of the chat-completions response this transport consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
    pub model: Option<String>,
}

impl ChatCompletionResponse {
    /// Returns the first choice's assistant text.
    ///
    /// Empty choice lists and absent content are explicit failures rather
    /// than silently-empty replies.
    pub fn first_choice_text(&self) -> Result<String, GroqApiError> {
        let choice = self.choices.first().ok_or(GroqApiError::EmptyCompletion)?;
        choice
            .message
            .content
            .clone()
            .ok_or_else(|| {
                GroqApiError::MalformedResponse(
                    "first choice carries no message content".to_string(),
                )
            })
    }
}
