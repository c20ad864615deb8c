use std::io::{self, Write};
use std::path::Path;

use crate::error::{AuroraError, Result};
use crate::search::{search, SearchConfig};
use crate::session::Session;
use crate::storage::NoteStore;
use crate::warnings::{format_warning, Warning};

use super::render::{write_notes, write_presets, write_results, write_stats, NoteFilter};
use super::repl::{run_session, ReplOptions};

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    SearchConfig::load_or_default(path)
}

pub fn handle_list(user: bool, demo: bool, json: bool) -> Result<()> {
    let store = NoteStore::seeded();
    let filter = NoteFilter::from_flags(user, demo);

    if json {
        let notes: Vec<_> = store.notes().iter().filter(|n| filter.matches(n)).collect();
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else {
        write_notes(&mut io::stdout().lock(), store.notes(), filter)?;
    }

    Ok(())
}

pub fn handle_search(
    config_path: Option<&Path>,
    query: Vec<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(limit) = limit {
        config.result_limit = limit;
        config.validate()?;
    }

    let query = query.join(" ");
    if query.trim().is_empty() {
        return Err(AuroraError::EmptyQuery);
    }

    let store = NoteStore::seeded();
    let results = search(store.notes(), &query, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!(
            "{}",
            format_warning(&Warning::NoResults {
                query: query.trim().to_string()
            })
        );
    } else {
        let highlight = atty::is(atty::Stream::Stdout);
        write_results(&mut io::stdout().lock(), &query, &results, highlight)?;
    }

    Ok(())
}

pub fn handle_presets() -> Result<()> {
    write_presets(&mut io::stdout().lock())?;
    Ok(())
}

pub fn handle_stats(json: bool) -> Result<()> {
    let stats = NoteStore::seeded().stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        write_stats(&mut io::stdout().lock(), &stats)?;
    }

    Ok(())
}

pub fn handle_session(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut session = Session::new(config);

    let options = ReplOptions {
        prompt: atty::is(atty::Stream::Stdin),
        highlight: atty::is(atty::Stream::Stdout),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(&mut session, stdin.lock(), &mut stdout, options)?;
    stdout.flush()?;

    Ok(())
}

pub fn handle_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
