use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::entity::{demo_notes, Note};
use crate::error::{AuroraError, Result};

/// Note counts shown on the journal overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoteStats {
    pub total: usize,
    pub demo: usize,
    pub user: usize,
}

/// Ordered, in-memory collection of notes for one session.
///
/// Identifiers come from a monotonically increasing counter, so an id
/// freed by `delete` is never handed out again.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl NoteStore {
    /// A store holding the ten demo notes.
    pub fn seeded() -> Self {
        Self::with_notes(demo_notes())
    }

    pub fn empty() -> Self {
        Self::with_notes(Vec::new())
    }

    fn with_notes(notes: Vec<Note>) -> Self {
        let next_id = match notes.iter().map(|n| n.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { notes, next_id }
    }

    /// Append a user note.
    ///
    /// Returns `EmptyNote` and leaves the store untouched when `text` is
    /// empty or whitespace-only, or `IdsExhausted` once every `u32` id has
    /// been used. Duplicates are accepted.
    pub fn add(&mut self, text: &str, tags: Option<&str>) -> Result<&Note> {
        if text.trim().is_empty() {
            return Err(AuroraError::EmptyNote);
        }

        let id = self.next_id.ok_or(AuroraError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        let note = Note::user(id, text, tags.unwrap_or_default(), Local::now());
        debug!(id, tags = %note.tags, "added note");
        self.notes.push(note);

        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Remove every note with the given id and return how many were removed.
    ///
    /// A missing id is not an error.
    pub fn delete(&mut self, id: u32) -> usize {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = before - self.notes.len();
        debug!(id, removed, "deleted note");
        removed
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn user_notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(|n| n.is_user())
    }

    pub fn demo_notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(|n| !n.is_user())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn stats(&self) -> NoteStats {
        let user = self.user_notes().count();
        NoteStats {
            total: self.notes.len(),
            demo: self.notes.len() - user,
            user,
        }
    }
}
