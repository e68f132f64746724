//! Fixed two-part prompt template rendered once per submitted turn.

use chat_provider::CompletionRequest;

pub const SYSTEM_INSTRUCTION_ENV_VAR: &str = "GROQ_CHAT_SYSTEM_INSTRUCTION";
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful and knowledgeable assistant. Answer the user's question accurately and concisely. If the user asks for code, provide a clear and accurate code snippet with a brief explanation.";

/// Reads the system instruction override from the environment, falling back
/// to the built-in default when unset or blank.
pub fn system_instruction_from_env() -> String {
    let from_env = std::env::var(SYSTEM_INSTRUCTION_ENV_VAR).ok();
    sanitize_system_instruction(from_env)
}

fn sanitize_system_instruction(raw: Option<String>) -> String {
    let Some(value) = raw else {
        return DEFAULT_SYSTEM_INSTRUCTION.to_string();
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        DEFAULT_SYSTEM_INSTRUCTION.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Stateless two-message prompt shape: a constant system instruction and a
/// user-turn slot interpolated with the submitted text at request time.
///
/// Constructed once at startup and shared read-only for the process lifetime.
/// The rendered request never carries prior transcript content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    system_instruction: String,
}

impl PromptTemplate {
    #[must_use]
    pub fn new(system_instruction: Option<String>) -> Self {
        Self {
            system_instruction: sanitize_system_instruction(system_instruction),
        }
    }

    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Renders the template for one turn's raw input.
    #[must_use]
    pub fn render(&self, input: &str) -> CompletionRequest {
        CompletionRequest::new(self.system_instruction.clone(), format!("Question: {input}"))
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    use super::*;

    struct EnvVarGuard {
        previous: Option<String>,
    }

    impl EnvVarGuard {
        fn set(value: Option<&str>) -> Self {
            let previous = std::env::var(SYSTEM_INSTRUCTION_ENV_VAR).ok();
            match value {
                Some(value) => std::env::set_var(SYSTEM_INSTRUCTION_ENV_VAR, value),
                None => std::env::remove_var(SYSTEM_INSTRUCTION_ENV_VAR),
            }

            Self { previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match &self.previous {
                Some(value) => std::env::set_var(SYSTEM_INSTRUCTION_ENV_VAR, value),
                None => std::env::remove_var(SYSTEM_INSTRUCTION_ENV_VAR),
            }
        }
    }

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        match mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn system_instruction_env_falls_back_to_default_when_unset_or_blank() {
        let _env_serialization = lock_unpoisoned(env_lock());

        {
            let _guard = EnvVarGuard::set(None);
            assert_eq!(system_instruction_from_env(), DEFAULT_SYSTEM_INSTRUCTION);
        }

        {
            let _guard = EnvVarGuard::set(Some("   \n\t"));
            assert_eq!(system_instruction_from_env(), DEFAULT_SYSTEM_INSTRUCTION);
        }
    }

    #[test]
    fn system_instruction_env_uses_trimmed_override_when_set() {
        let _env_serialization = lock_unpoisoned(env_lock());
        let _guard = EnvVarGuard::set(Some("  custom system instruction  "));

        assert_eq!(system_instruction_from_env(), "custom system instruction");
    }

    #[test]
    fn render_interpolates_only_the_current_question() {
        let template = PromptTemplate::new(Some("be terse".to_string()));

        let request = template.render("what is 2+2?");

        assert_eq!(request.system_instruction, "be terse");
        assert_eq!(request.question, "Question: what is 2+2?");
    }

    #[test]
    fn render_never_alters_the_system_segment_between_turns() {
        let template = PromptTemplate::default();

        let first = template.render("a");
        let second = template.render("b");

        assert_eq!(first.system_instruction, second.system_instruction);
        assert_eq!(first.system_instruction, DEFAULT_SYSTEM_INSTRUCTION);
    }
}
