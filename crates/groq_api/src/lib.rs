//! Transport-only Groq API client primitives.
//!
//! This crate owns request/response building and parsing behavior for the
//! OpenAI-compatible Groq chat-completions endpoint only. It intentionally
//! contains no prompt templating, no transcript state, and no runtime UI
//! coupling.
//!
//! The protocol surface is deliberately narrow: one non-streaming POST per
//! completion, a typed error taxonomy for everything that can go wrong, and
//! OpenAI-style error-body parsing for failure diagnostics.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod payload;
pub mod url;

pub use client::GroqApiClient;
pub use config::GroqApiConfig;
pub use error::GroqApiError;
pub use payload::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use url::normalize_groq_url;
