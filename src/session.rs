//! Session state: one note store plus the last search.
//!
//! Nothing here outlives the process. A new session always starts from the
//! seeded demo notes.

use tracing::{debug, warn};

use crate::entity::Note;
use crate::error::{AuroraError, Result};
use crate::search::{search, SearchConfig, SearchResult, PRESET_QUERIES};
use crate::storage::NoteStore;

#[derive(Debug, Clone)]
pub struct Session {
    store: NoteStore,
    config: SearchConfig,
    last_query: String,
    last_results: Vec<SearchResult>,
}

impl Session {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_store(NoteStore::seeded(), config)
    }

    pub fn with_store(store: NoteStore, config: SearchConfig) -> Self {
        Self {
            store,
            config,
            last_query: String::new(),
            last_results: Vec::new(),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn last_results(&self) -> &[SearchResult] {
        &self.last_results
    }

    pub fn add_note(&mut self, text: &str, tags: Option<&str>) -> Result<&Note> {
        let result = self.store.add(text, tags);
        if matches!(result, Err(AuroraError::EmptyNote)) {
            warn!("rejected empty note");
        }
        result
    }

    /// Delete a user note. Demo notes are read-only; unknown ids succeed
    /// without removing anything.
    pub fn delete_note(&mut self, id: u32) -> Result<usize> {
        if self.store.get(id).is_some_and(|n| !n.is_user()) {
            warn!(id, "refused to delete demo note");
            return Err(AuroraError::DemoNoteReadOnly(id));
        }
        Ok(self.store.delete(id))
    }

    /// Run a search and remember the query and its results.
    pub fn search(&mut self, query: &str) -> Result<&[SearchResult]> {
        if query.trim().is_empty() {
            warn!("rejected empty query");
            return Err(AuroraError::EmptyQuery);
        }

        self.last_results = search(self.store.notes(), query, &self.config);
        self.last_query = query.to_string();
        debug!(query, hits = self.last_results.len(), "session search");

        Ok(&self.last_results)
    }

    /// Run one of the preset queries, numbered from 1.
    pub fn run_preset(&mut self, number: usize) -> Result<&[SearchResult]> {
        let (query, _) = number
            .checked_sub(1)
            .and_then(|i| PRESET_QUERIES.get(i))
            .ok_or(AuroraError::UnknownPreset(number))?;
        self.search(query)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
