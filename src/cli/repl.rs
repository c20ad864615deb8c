use std::io::{BufRead, Write};

use clap::{CommandFactory, Parser};
use tracing::info;

use super::commands::{SessionCommand, SessionLine};
use super::render::{write_notes, write_presets, write_results, write_stats, NoteFilter};
use crate::error::{AuroraError, Result};
use crate::session::Session;
use crate::warnings::{format_warning, Warning};

const PROMPT: &str = "aurora> ";

/// Terminal behaviour for an interactive session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Print a prompt before each line.
    pub prompt: bool,
    /// Bold matched notes in search output.
    pub highlight: bool,
}

enum Flow {
    Continue,
    Quit,
}

/// Split a line on whitespace, keeping double-quoted runs together.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(AuroraError::InvalidCommand(
            "unterminated quote".to_string(),
        ));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Read commands from `input` until EOF or `quit`, writing output to `out`.
pub fn run_session<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    options: ReplOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("session started");
    let mut lines = input.lines();

    loop {
        if options.prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let tokens = match split_line(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        match execute(session, parsed.command, out, options) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(AuroraError::Io(e)) => return Err(AuroraError::Io(e)),
            Err(e) => match Warning::from_error(&e) {
                Some(warning) => writeln!(out, "{}", format_warning(&warning))?,
                None => writeln!(out, "Error: {}", e)?,
            },
        }
    }

    let stats = session.store().stats();
    info!(total = stats.total, user = stats.user, "session ended");
    Ok(())
}

fn execute<W: Write>(
    session: &mut Session,
    command: SessionCommand,
    out: &mut W,
    options: ReplOptions,
) -> Result<Flow> {
    match command {
        SessionCommand::Add { text, tags } => {
            let note = session.add_note(&text.join(" "), tags.as_deref())?;
            writeln!(out, "Saved note {:03}.", note.id)?;
        }
        SessionCommand::Delete { id } => {
            session.delete_note(id)?;
            writeln!(out, "Deleted note {:03}.", id)?;
        }
        SessionCommand::Search { query } => {
            let query = query.join(" ");
            session.search(&query)?;
            show_last(session, out, options)?;
        }
        SessionCommand::Preset { number } => {
            session.run_preset(number)?;
            show_last(session, out, options)?;
        }
        SessionCommand::Presets => write_presets(out)?,
        SessionCommand::List { user, demo } => {
            write_notes(out, session.store().notes(), NoteFilter::from_flags(user, demo))?
        }
        SessionCommand::Stats => write_stats(out, &session.store().stats())?,
        SessionCommand::Last => {
            if session.last_query().is_empty() {
                writeln!(out, "No search yet.")?;
            } else {
                show_last(session, out, options)?;
            }
        }
        SessionCommand::Help => {
            writeln!(out, "Commands:\n")?;
            for sub in SessionLine::command().get_subcommands() {
                let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
                writeln!(out, "  {:<8} {}", sub.get_name(), about)?;
            }
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn show_last<W: Write>(session: &Session, out: &mut W, options: ReplOptions) -> Result<()> {
    let results = session.last_results();
    if results.is_empty() {
        let warning = Warning::NoResults {
            query: session.last_query().trim().to_string(),
        };
        writeln!(out, "{}", format_warning(&warning))?;
    } else {
        write_results(out, session.last_query(), results, options.highlight)?;
    }
    Ok(())
}
