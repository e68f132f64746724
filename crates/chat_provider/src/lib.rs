//! Minimal provider-agnostic contract for executing a single completion turn.
//!
//! This crate intentionally defines only the rendered-request shape and the
//! synchronous completion interface. It excludes provider transport details,
//! protocol payloads, and transcript/session concerns.

use std::fmt;

/// Error returned while constructing/configuring a provider before any turn starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInitError {
    message: String,
}

impl ProviderInitError {
    /// Creates a new provider initialization error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the underlying error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProviderInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProviderInitError {}

impl From<String> for ProviderInitError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ProviderInitError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Fully rendered input for one completion turn.
///
/// Carries exactly the fixed system instruction and the current templated
/// question. Prior turns are never part of a request; every turn is
/// independent from the model's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub question: String,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(system_instruction: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            question: question.into(),
        }
    }
}

/// Immutable metadata describing a completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub provider_id: String,
    pub model_id: String,
}

/// Provider interface for executing one completion request.
///
/// `complete` blocks the calling context until the provider produces a reply
/// or a failure description. Failures are data, not panics: callers branch on
/// the returned `Result` and never observe an unwind across this boundary.
pub trait CompletionProvider: Send + Sync + 'static {
    /// Returns provider/model identity metadata.
    fn profile(&self) -> ProviderProfile;

    /// Executes one completion request to completion.
    fn complete(&self, request: CompletionRequest) -> Result<String, String>;
}

#[cfg(test)]
mod tests {
    use super::{CompletionProvider, CompletionRequest, ProviderInitError, ProviderProfile};

    struct MinimalProvider;

    impl CompletionProvider for MinimalProvider {
        fn profile(&self) -> ProviderProfile {
            ProviderProfile {
                provider_id: "minimal".to_string(),
                model_id: "minimal-model".to_string(),
            }
        }

        fn complete(&self, request: CompletionRequest) -> Result<String, String> {
            Ok(format!("echo: {}", request.question))
        }
    }

    #[test]
    fn provider_init_error_preserves_message() {
        let error = ProviderInitError::new("missing api key");
        assert_eq!(error.message(), "missing api key");
        assert_eq!(error.to_string(), "missing api key");
    }

    #[test]
    fn provider_init_error_converts_from_string_types() {
        assert_eq!(
            ProviderInitError::from("bad config"),
            ProviderInitError::new("bad config")
        );
        assert_eq!(
            ProviderInitError::from("bad config".to_string()),
            ProviderInitError::new("bad config")
        );
    }

    #[test]
    fn completion_request_carries_instruction_and_question() {
        let request = CompletionRequest::new("system instruction", "Question: what is 2+2?");

        assert_eq!(request.system_instruction, "system instruction");
        assert_eq!(request.question, "Question: what is 2+2?");
    }

    #[test]
    fn minimal_provider_completes_one_request() {
        let provider = MinimalProvider;
        let reply = provider
            .complete(CompletionRequest::new("sys", "hello"))
            .expect("minimal provider should complete");

        assert_eq!(reply, "echo: hello");
        assert_eq!(provider.profile().provider_id, "minimal");
    }
}
