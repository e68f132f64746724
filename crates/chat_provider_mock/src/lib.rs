//! Deterministic mock implementation of the shared `chat_provider` contract.
//!
//! This crate contains no transport/protocol logic and is intended for local
//! development and contract-level integration testing. Replies are scripted:
//! each `complete` call consumes the next scripted outcome, falling back to a
//! canned default once the script is exhausted.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use chat_provider::{CompletionProvider, CompletionRequest, ProviderProfile};

/// Stable provider identifier used for explicit startup selection.
pub const MOCK_PROVIDER_ID: &str = "mock";

const DEFAULT_REPLY: &str =
    "This is a canned mock reply. Set GROQ_CHAT_PROVIDER=groq for real completions.";

/// Deterministic mock provider used by `groq_chat` tests and local runs.
#[derive(Debug)]
pub struct MockProvider {
    scripted: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
    model_id: String,
}

impl MockProvider {
    /// Creates a mock provider with caller-scripted reply outcomes.
    #[must_use]
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            scripted: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            model_id: "mock-model".to_string(),
        }
    }

    /// Returns every request observed so far, in call order.
    #[must_use]
    pub fn received_requests(&self) -> Vec<CompletionRequest> {
        lock_unpoisoned(&self.requests).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CompletionProvider for MockProvider {
    fn profile(&self) -> ProviderProfile {
        ProviderProfile {
            provider_id: MOCK_PROVIDER_ID.to_string(),
            model_id: self.model_id.clone(),
        }
    }

    fn complete(&self, request: CompletionRequest) -> Result<String, String> {
        lock_unpoisoned(&self.requests).push(request);

        lock_unpoisoned(&self.scripted)
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_REPLY.to_string()))
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
