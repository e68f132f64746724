use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::GroqApiConfig;
use crate::error::{parse_error_message, GroqApiError};
use crate::headers::build_headers;
use crate::payload::{ChatCompletionRequest, ChatCompletionResponse};
use crate::url::normalize_groq_url;

#[derive(Debug)]
pub struct GroqApiClient {
    http: Client,
    config: GroqApiConfig,
}

impl GroqApiClient {
    pub fn new(config: GroqApiConfig) -> Result<Self, GroqApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(GroqApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GroqApiConfig {
        &self.config
    }

    pub fn normalized_endpoint(&self) -> String {
        normalize_groq_url(&self.config.base_url)
    }

    pub fn build_headers(&self, user_agent: Option<&str>) -> Result<HeaderMap, GroqApiError> {
        let headers = build_headers(&self.config, user_agent)?;
        let mut out = HeaderMap::new();
        for (key, value) in headers {
            out.insert(
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                    GroqApiError::InvalidBaseUrl(format!("invalid header key: {key}"))
                })?,
                HeaderValue::from_str(&value).map_err(|_| {
                    GroqApiError::InvalidBaseUrl(format!("invalid header value for {key}"))
                })?,
            );
        }
        Ok(out)
    }

    pub fn build_request(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<reqwest::RequestBuilder, GroqApiError> {
        validate_request_payload_shape(request)?;

        let headers = self.build_headers(self.config.user_agent.as_deref())?;
        let payload = request_with_transport_defaults(request);
        Ok(self
            .http
            .post(self.normalized_endpoint())
            .headers(headers)
            .json(&payload))
    }

    /// Send one chat-completion request and return the assistant text.
    ///
    /// Exactly one HTTP request is dispatched per call. Failures of any kind
    /// surface immediately; there is no retry loop in this transport.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, GroqApiError> {
        debug!(model = %request.model, endpoint = %self.normalized_endpoint(), "dispatching chat completion");

        let response = self.build_request(request)?.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            let message = parse_error_message(status, &body);
            warn!(%status, %message, "chat completion request failed");
            return Err(GroqApiError::Status(status, message));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ChatCompletionResponse>(&body)?;
        parsed.first_choice_text()
    }
}

fn validate_request_payload_shape(request: &ChatCompletionRequest) -> Result<(), GroqApiError> {
    if request.model.trim().is_empty() {
        return Err(GroqApiError::InvalidRequestPayload(
            "'model' must be a non-empty model identifier".to_string(),
        ));
    }
    if request.messages.is_empty() {
        return Err(GroqApiError::InvalidRequestPayload(
            "'messages' must contain at least one message".to_string(),
        ));
    }

    Ok(())
}

fn request_with_transport_defaults(request: &ChatCompletionRequest) -> ChatCompletionRequest {
    let mut payload = request.clone();
    payload.stream = false;
    payload
}
