//! Startup provider selection and environment-driven configuration.

use std::sync::Arc;
use std::time::Duration;

use chat_provider::CompletionProvider;
use chat_provider_groq::{GroqProvider, GroqProviderConfig, DEFAULT_GROQ_MODEL_ID};
use chat_provider_mock::MockProvider;

pub const DEFAULT_PROVIDER_ID: &str = "groq";
pub const PROVIDER_ENV_VAR: &str = "GROQ_CHAT_PROVIDER";
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";
pub const MODEL_ENV_VAR: &str = "GROQ_CHAT_MODEL";
pub const BASE_URL_ENV_VAR: &str = "GROQ_CHAT_BASE_URL";
pub const TIMEOUT_SEC_ENV_VAR: &str = "GROQ_CHAT_TIMEOUT_SEC";

pub fn provider_from_env() -> Result<Arc<dyn CompletionProvider>, String> {
    let provider_id = std::env::var(PROVIDER_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    provider_for_id(provider_id.as_deref().unwrap_or(DEFAULT_PROVIDER_ID))
}

pub fn provider_for_id(provider_id: &str) -> Result<Arc<dyn CompletionProvider>, String> {
    match provider_id {
        "groq" => Ok(Arc::new(
            GroqProvider::new(groq_config_from_env()?).map_err(|error| error.to_string())?,
        )),
        "mock" => Ok(Arc::new(MockProvider::default())),
        unknown => Err(format!(
            "Unsupported provider '{unknown}'. Available providers: groq, mock"
        )),
    }
}

fn groq_config_from_env() -> Result<GroqProviderConfig, String> {
    let api_key = std::env::var(API_KEY_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            format!("{API_KEY_ENV_VAR} not found. Set it in the environment or a .env file.")
        })?;

    let model_id = std::env::var(MODEL_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_GROQ_MODEL_ID.to_string());

    let mut config = GroqProviderConfig::new(api_key, model_id);

    if let Some(base_url) = std::env::var(BASE_URL_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    {
        config = config.with_base_url(base_url);
    }

    if let Some(raw_timeout) = std::env::var(TIMEOUT_SEC_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    {
        let seconds: u64 = raw_timeout.parse().map_err(|_| {
            format!("{TIMEOUT_SEC_ENV_VAR} must be a positive integer, got '{raw_timeout}'")
        })?;
        if seconds == 0 {
            return Err(format!("{TIMEOUT_SEC_ENV_VAR} must be greater than zero"));
        }
        config = config.with_timeout(Duration::from_secs(seconds));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_for_id_supports_mock() {
        let provider = provider_for_id("mock").expect("mock provider should resolve");
        assert_eq!(provider.profile().provider_id, "mock");
    }

    #[test]
    fn provider_for_id_rejects_unknown_provider() {
        let error = match provider_for_id("custom") {
            Ok(_) => panic!("unknown providers should fail"),
            Err(error) => error,
        };

        assert!(error.contains("Unsupported provider 'custom'"));
    }
}
