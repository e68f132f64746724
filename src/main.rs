use std::process::ExitCode;

use groq_chat::app::ChatSession;
use groq_chat::prompt::{system_instruction_from_env, PromptTemplate};
use groq_chat::providers;
use groq_chat::ui;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Startup-fatal path: no input is accepted without a working provider.
    let provider = match providers::provider_from_env() {
        Ok(provider) => provider,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let template = PromptTemplate::new(Some(system_instruction_from_env()));
    let mut session = ChatSession::new(provider, template);

    match ui::run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("surface I/O failure: {error}");
            ExitCode::FAILURE
        }
    }
}
