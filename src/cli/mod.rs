mod commands;
mod handlers;
mod render;
mod repl;

pub use commands::{Cli, Commands, SessionCommand, SessionLine};
pub use handlers::{
    handle_config, handle_list, handle_presets, handle_search, handle_session, handle_stats,
};
pub use render::NoteFilter;
pub use repl::{run_session, split_line, ReplOptions};
