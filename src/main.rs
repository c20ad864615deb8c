use std::io;

use aurora::cli::{
    handle_config, handle_list, handle_presets, handle_search, handle_session, handle_stats, Cli,
    Commands,
};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    // stdout carries command output, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::List { user, demo, json } => handle_list(user, demo, json),
        Commands::Search { query, limit, json } => handle_search(config, query, limit, json),
        Commands::Presets => handle_presets(),
        Commands::Stats { json } => handle_stats(json),
        Commands::Session => handle_session(config),
        Commands::Config => handle_config(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
