//! Groq-backed implementation of the shared `chat_provider` contract.
//!
//! This adapter translates the provider-neutral completion request into one
//! `groq_api` chat-completions call, blocking the calling thread for the full
//! request/response exchange.

use std::sync::Arc;
use std::time::Duration;

use chat_provider::{CompletionProvider, CompletionRequest, ProviderInitError, ProviderProfile};
use groq_api::{ChatCompletionRequest, ChatMessage, GroqApiClient, GroqApiConfig, GroqApiError};

/// Stable provider identifier used by `groq_chat` startup selection.
pub const GROQ_PROVIDER_ID: &str = "groq";

/// Default Groq model served when no explicit model is configured.
pub const DEFAULT_GROQ_MODEL_ID: &str = "gemma2-9b-it";

/// Runtime configuration for the Groq provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroqProviderConfig {
    pub api_key: String,
    pub model_id: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl GroqProviderConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: model_id.into(),
            base_url: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn into_groq_api_config(self) -> GroqApiConfig {
        let mut config = GroqApiConfig::new(self.api_key);

        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }

        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        config
    }
}

trait CompleteClient: Send + Sync {
    fn complete(&self, request: &ChatCompletionRequest) -> Result<String, GroqApiError>;
}

#[derive(Debug)]
struct DefaultCompleteClient {
    client: GroqApiClient,
}

impl CompleteClient for DefaultCompleteClient {
    fn complete(&self, request: &ChatCompletionRequest) -> Result<String, GroqApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| {
                GroqApiError::Unknown(format!("failed to initialize tokio runtime: {error}"))
            })?;

        runtime.block_on(self.client.complete(request))
    }
}

/// `CompletionProvider` adapter backed by `groq_api` transport primitives.
pub struct GroqProvider {
    model_id: String,
    complete_client: Arc<dyn CompleteClient>,
}

impl GroqProvider {
    /// Creates a provider using real Groq API transport.
    pub fn new(config: GroqProviderConfig) -> Result<Self, ProviderInitError> {
        let model_id = sanitize_model_id(config.model_id.clone());
        let complete_client = Arc::new(DefaultCompleteClient {
            client: GroqApiClient::new(config.into_groq_api_config()).map_err(map_init_error)?,
        });

        Ok(Self {
            model_id,
            complete_client,
        })
    }

    fn chat_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            self.model_id.clone(),
            vec![
                ChatMessage::system(request.system_instruction.clone()),
                ChatMessage::user(request.question.clone()),
            ],
        )
    }

    #[cfg(test)]
    fn with_complete_client_for_tests(
        model_id: impl Into<String>,
        complete_client: Arc<dyn CompleteClient>,
    ) -> Self {
        Self {
            model_id: sanitize_model_id(model_id.into()),
            complete_client,
        }
    }
}

impl CompletionProvider for GroqProvider {
    fn profile(&self) -> ProviderProfile {
        ProviderProfile {
            provider_id: GROQ_PROVIDER_ID.to_string(),
            model_id: self.model_id.clone(),
        }
    }

    fn complete(&self, request: CompletionRequest) -> Result<String, String> {
        let chat_request = self.chat_request(&request);

        self.complete_client
            .complete(&chat_request)
            .map_err(|error| error.to_string())
    }
}

fn sanitize_model_id(model_id: String) -> String {
    let trimmed = model_id.trim();
    if trimmed.is_empty() {
        DEFAULT_GROQ_MODEL_ID.to_string()
    } else {
        trimmed.to_string()
    }
}

fn map_init_error(error: GroqApiError) -> ProviderInitError {
    ProviderInitError::new(format!("Failed to initialize groq provider: {error}"))
}
