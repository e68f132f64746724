//! Line-oriented presentation surface.
//!
//! Owns input capture and transcript drawing; the session owns state. The
//! loop is cooperative and single-threaded: each submission runs to
//! completion (including the blocking completion call) before the next line
//! is read, which is exactly the turn-taking contract the session expects.

use std::io::{self, BufRead, Write};

use crate::app::{ChatSession, SurfaceOps};
use crate::commands::{parse_slash_command, SlashCommand};
use crate::transcript::{ChatEntry, Role};

const HELP_TEXT: &str = "Commands: /help, /clear, /quit";
const USER_LABEL: &str = "You";
const ASSISTANT_LABEL: &str = "Assistant";

/// Deferred-redraw surface handle passed to session event handlers.
#[derive(Debug, Default)]
pub struct LineSurface {
    render_requested: bool,
    stop_requested: bool,
}

impl LineSurface {
    fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}

impl SurfaceOps for LineSurface {
    fn request_render(&mut self) {
        self.render_requested = true;
    }

    fn request_stop(&mut self) {
        self.stop_requested = true;
    }
}

/// Runs the read/submit/redraw loop until `/quit` or end of input.
pub fn run(session: &mut ChatSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut surface = LineSurface::default();

    print_banner(&mut stdout, session)?;

    let mut line = String::new();
    loop {
        write!(stdout, "you> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_slash_command(&line) {
            Some(SlashCommand::Help) => writeln!(stdout, "{HELP_TEXT}")?,
            Some(SlashCommand::Clear) => session.clear_history(&mut surface),
            Some(SlashCommand::Quit) => session.on_quit(&mut surface),
            Some(SlashCommand::Unknown(command)) => {
                writeln!(stdout, "Unknown command: {command}. {HELP_TEXT}")?;
            }
            None => session.on_submit(&line, &mut surface),
        }

        if surface.take_render_request() {
            render_transcript(&mut stdout, session.transcript())?;
        }

        if surface.stop_requested {
            break;
        }
    }

    Ok(())
}

fn print_banner(out: &mut impl Write, session: &ChatSession) -> io::Result<()> {
    let profile = session.provider_profile();
    writeln!(out, "groq_chat: ask any question, one line per turn.")?;
    writeln!(
        out,
        "Provider: {} | Model: {}",
        profile.provider_id, profile.model_id
    )?;
    writeln!(out, "{HELP_TEXT}")
}

fn render_transcript(out: &mut impl Write, entries: &[ChatEntry]) -> io::Result<()> {
    writeln!(out)?;
    for entry in entries {
        let label = match entry.role {
            Role::User => USER_LABEL,
            Role::Assistant => ASSISTANT_LABEL,
        };
        writeln!(out, "{label}: {}", entry.content)?;
    }
    writeln!(out)
}
