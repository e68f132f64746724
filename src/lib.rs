//! Single-session conversational chat widget over the Groq completion API.
//!
//! ## Provider bootstrap
//!
//! `groq_chat` selects its completion provider at startup:
//!
//! - `GROQ_CHAT_PROVIDER=groq` (default) for real Groq API transport
//! - `GROQ_CHAT_PROVIDER=mock` for deterministic local runs
//!
//! When the `groq` provider is active, `GROQ_API_KEY` is required; a missing
//! key is startup-fatal and the process exits before reading any input.
//! Optional knobs: `GROQ_CHAT_MODEL` (default `gemma2-9b-it`),
//! `GROQ_CHAT_BASE_URL`, `GROQ_CHAT_TIMEOUT_SEC` (positive integer seconds),
//! and `GROQ_CHAT_SYSTEM_INSTRUCTION` to override the built-in system
//! instruction. A `.env` file in the working directory is honored.
//!
//! ## Turn contract
//!
//! Each submitted line produces exactly one completion request carrying the
//! fixed system instruction and the current question only; prior transcript
//! entries are never replayed to the model. Every non-empty submission yields
//! a User/Assistant entry pair; a failed completion call still yields an
//! Assistant entry prefixed with `Error generating response: `.

pub mod app;
pub mod commands;
pub mod prompt;
pub mod providers;
pub mod transcript;
pub mod ui;
