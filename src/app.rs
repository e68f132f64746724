//! Session state machine: one submit event, one completion call, two
//! transcript entries.

use std::sync::Arc;

use chat_provider::{CompletionProvider, ProviderProfile};
use tracing::debug;

use crate::prompt::PromptTemplate;
use crate::transcript::{ChatEntry, Transcript};

/// Literal prefix for assistant entries produced by a failed completion call.
pub const ERROR_REPLY_PREFIX: &str = "Error generating response: ";

/// Surface hooks driven by the session.
///
/// The presentation layer owns input capture and drawing; the session only
/// signals when a redraw or shutdown is wanted.
pub trait SurfaceOps {
    fn request_render(&mut self);
    fn request_stop(&mut self);
}

/// One user chat session: transcript plus synchronous turn-taking.
///
/// The provider handle and prompt template are process-wide shared immutable
/// state; the transcript is owned by this session alone. `on_submit` runs to
/// completion, including the blocking provider call, before the surface can
/// deliver another event, so no interior locking is needed.
pub struct ChatSession {
    transcript: Transcript,
    template: PromptTemplate,
    provider: Arc<dyn CompletionProvider>,
}

impl ChatSession {
    #[must_use]
    pub fn new(provider: Arc<dyn CompletionProvider>, template: PromptTemplate) -> Self {
        Self {
            transcript: Transcript::new(),
            template,
            provider,
        }
    }

    /// Returns provider/model identity for banner display.
    #[must_use]
    pub fn provider_profile(&self) -> ProviderProfile {
        self.provider.profile()
    }

    /// Read-only transcript view for rendering.
    #[must_use]
    pub fn transcript(&self) -> &[ChatEntry] {
        self.transcript.snapshot()
    }

    /// Handles one submission event.
    ///
    /// Empty or whitespace-only input is a non-event: nothing is appended and
    /// no request is made. Otherwise exactly one user entry and exactly one
    /// assistant entry are appended, the latter carrying either the verbatim
    /// completion text or an [`ERROR_REPLY_PREFIX`]-tagged failure
    /// description. Failures never propagate to the caller.
    pub fn on_submit(&mut self, raw_input: &str, surface: &mut dyn SurfaceOps) {
        let input = raw_input.trim();
        if input.is_empty() {
            surface.request_render();
            return;
        }

        self.transcript.append(ChatEntry::user(input));

        let request = self.template.render(input);
        debug!(question = %request.question, "submitting chat turn");

        let reply = match self.provider.complete(request) {
            Ok(text) => text,
            Err(description) => format!("{ERROR_REPLY_PREFIX}{description}"),
        };

        self.transcript.append(ChatEntry::assistant(reply));
        surface.request_render();
    }

    /// Empties the transcript and requests an immediate redraw.
    pub fn clear_history(&mut self, surface: &mut dyn SurfaceOps) {
        self.transcript.clear();
        surface.request_render();
    }

    /// Signals the surface to stop delivering events.
    pub fn on_quit(&mut self, surface: &mut dyn SurfaceOps) {
        surface.request_stop();
    }
}
