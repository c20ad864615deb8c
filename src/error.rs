use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuroraError {
    #[error("Note text must not be empty")]
    EmptyNote,

    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Unknown preset: {0}. Run 'presets' to see the list.")]
    UnknownPreset(usize),

    #[error("No note identifiers left in this session")]
    IdsExhausted,

    #[error("Note {0} is a demo note and cannot be deleted")]
    DemoNoteReadOnly(u32),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AuroraError>;
