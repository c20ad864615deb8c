use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aurora")]
#[command(version, about = "A private journaling assistant that keeps everything in memory")]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML file with search weights and result limit
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the demo notes
    List {
        /// Only notes added in this session
        #[arg(long, conflicts_with = "demo")]
        user: bool,

        /// Only the built-in demo notes
        #[arg(long, conflicts_with = "user")]
        demo: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the demo notes by text and tags
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,

        /// Maximum number of results (overrides the config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the preset queries
    Presets,

    /// Show note counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session on stdin
    Session,

    /// Print the effective search configuration as YAML
    Config,
}

/// One line typed into an interactive session.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a note (options go before the text)
    Add {
        /// Tags, comma separated
        #[arg(long, short = 't')]
        tags: Option<String>,

        /// Note text, taken verbatim from its first word on (leading '-' allowed)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete one of your notes by ID
    Delete {
        /// Note ID
        id: u32,
    },

    /// Search notes by text and tags
    Search {
        /// Search query
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Run a preset query by number
    Preset {
        /// Preset number (see 'presets')
        number: usize,
    },

    /// Show the preset queries
    Presets,

    /// List notes
    List {
        /// Only notes added in this session
        #[arg(long, conflicts_with = "demo")]
        user: bool,

        /// Only the built-in demo notes
        #[arg(long, conflicts_with = "user")]
        demo: bool,
    },

    /// Show note counts
    Stats,

    /// Show the results of the last search again
    Last,

    /// Show available commands
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
