//! User-visible warnings for rejected or empty operations.
//!
//! Validation failures never abort an interactive session; they are turned
//! into one of these warnings and shown to the user instead.

use crate::error::AuroraError;

/// A warning shown to the user when an action had no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Add was called with blank text.
    EmptyNote,
    /// Search was called with a blank query.
    EmptyQuery,
    /// Search ran but matched nothing.
    NoResults { query: String },
    /// Delete targeted one of the seed notes.
    DemoNoteReadOnly { id: u32 },
}

impl Warning {
    /// Map a validation error to its warning, if it has one.
    pub fn from_error(err: &AuroraError) -> Option<Self> {
        match err {
            AuroraError::EmptyNote => Some(Warning::EmptyNote),
            AuroraError::EmptyQuery => Some(Warning::EmptyQuery),
            AuroraError::DemoNoteReadOnly(id) => Some(Warning::DemoNoteReadOnly { id: *id }),
            _ => None,
        }
    }
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::EmptyNote => "Warning: enter the note text".to_string(),
        Warning::EmptyQuery => "Warning: enter a search query".to_string(),
        Warning::NoResults { query } => {
            format!(
                "Warning: nothing found for '{}'. Try other words.",
                query
            )
        }
        Warning::DemoNoteReadOnly { id } => {
            format!("Warning: note {} is a demo note and cannot be deleted", id)
        }
    }
}
