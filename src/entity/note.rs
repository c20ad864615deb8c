// src/entity/note.rs
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format for note timestamps (day.month.year hour:minute).
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Where a note came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteOrigin {
    /// One of the fixed seed entries.
    #[default]
    Demo,
    /// Added during the current session.
    User,
}

impl fmt::Display for NoteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteOrigin::Demo => write!(f, "demo"),
            NoteOrigin::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: String,
    /// Comma-separated tags, empty when the note has none.
    #[serde(default)]
    pub tags: String,
    /// Only user notes carry a timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
    #[serde(default)]
    pub origin: NoteOrigin,
}

impl Note {
    pub fn demo(id: u32, text: &str, tags: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            tags: tags.to_string(),
            created_at: None,
            origin: NoteOrigin::Demo,
        }
    }

    /// Build a user note. Text and tags are stored trimmed.
    pub fn user(id: u32, text: &str, tags: &str, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            tags: tags.trim().to_string(),
            created_at: Some(created_at),
            origin: NoteOrigin::User,
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == NoteOrigin::User
    }

    /// Individual tags, trimmed, with empty pieces dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn created_display(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }
}
