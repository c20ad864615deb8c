//! Search module for scoring notes against a free-text query.
//!
//! Scoring is a plain substring heuristic over the note body and tag string:
//! - body contains the query: `body_weight`
//! - tags contain the query: `tag_weight`
//! - body equals the query: `exact_bonus`
//!
//! The parts stack and the sum is clamped to `max_score`. An exact match is
//! also a body match, so it always reaches the cap with the default weights.

mod config;

pub use config::SearchConfig;

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::entity::{Note, TIMESTAMP_FORMAT};

/// One-click queries offered next to the search box, as (query, description).
pub static PRESET_QUERIES: [(&str, &str); 4] = [
    ("врач", "Medical notes"),
    ("булки", "Food notes"),
    ("идея", "Business notes"),
    ("бегать", "Health notes"),
];

/// A note matched by a query, with its clamped score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: u32,
    pub text: String,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
    pub score: f64,
}

impl SearchResult {
    fn from_note(note: &Note, score: f64) -> Self {
        Self {
            id: note.id,
            text: note.text.clone(),
            tags: note.tags.clone(),
            created_at: note.created_at,
            score,
        }
    }

    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }

    pub fn relevance(&self) -> Relevance {
        Relevance::from_percent(self.percent())
    }

    pub fn created_display(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Coarse relevance band used when rendering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 70.0 {
            Relevance::High
        } else if percent > 40.0 {
            Relevance::Medium
        } else {
            Relevance::Low
        }
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relevance::High => write!(f, "high"),
            Relevance::Medium => write!(f, "medium"),
            Relevance::Low => write!(f, "low"),
        }
    }
}

/// Raw (unclamped) score of a note for an already lowercased, trimmed query.
fn score_note(note: &Note, query: &str, config: &SearchConfig) -> f64 {
    let body = note.text.to_lowercase();
    let mut score = 0.0;

    if body.contains(query) {
        score += config.body_weight;
    }

    if !note.tags.is_empty() && note.tags.to_lowercase().contains(query) {
        score += config.tag_weight;
    }

    if body.trim() == query {
        score += config.exact_bonus;
    }

    score
}

/// Rank `notes` against `query`.
///
/// Returns at most `config.result_limit` results ordered by descending
/// score. Equal scores keep the order of `notes`. A blank query returns
/// nothing.
pub fn search(notes: &[Note], query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = notes
        .iter()
        .filter_map(|note| {
            let score = score_note(note, &query, config);
            (score > 0.0).then(|| SearchResult::from_note(note, score.min(config.max_score)))
        })
        .collect();

    // sort_by is stable, so ties stay in store order
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(config.result_limit);

    debug!(query = %query, hits = results.len(), "search complete");
    results
}
