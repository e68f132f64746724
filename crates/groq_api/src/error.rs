use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroqApiError {
    #[error("api key is required")]
    MissingApiKey,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid request payload: {0}")]
    InvalidRequestPayload(String),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0} {1}")]
    Status(StatusCode, String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("completion response contained no choices")]
    EmptyCompletion,

    #[error("{0}")]
    Unknown(String),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(rename = "error")]
    pub value: Option<ErrorPayloadFields>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayloadFields {
    pub message: Option<String>,
}

/// Extract a human-readable message from an OpenAI-style error body,
/// falling back to the raw body or the status reason.
pub fn parse_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorPayload { value: Some(error) }) = serde_json::from_str::<ErrorPayload>(body) {
        if let Some(message) = error.message.as_deref().filter(|value| !value.is_empty()) {
            return message.to_string();
        }
    }

    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
