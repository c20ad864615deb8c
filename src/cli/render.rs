use std::io::{self, Write};

use crate::entity::Note;
use crate::search::{SearchResult, PRESET_QUERIES};
use crate::storage::NoteStats;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Which notes a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFilter {
    All,
    User,
    Demo,
}

impl NoteFilter {
    pub fn from_flags(user: bool, demo: bool) -> Self {
        match (user, demo) {
            (true, _) => NoteFilter::User,
            (_, true) => NoteFilter::Demo,
            _ => NoteFilter::All,
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        match self {
            NoteFilter::All => true,
            NoteFilter::User => note.is_user(),
            NoteFilter::Demo => !note.is_user(),
        }
    }
}

pub fn write_notes<'a, W, I>(out: &mut W, notes: I, filter: NoteFilter) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Note>,
{
    let notes: Vec<&Note> = notes.into_iter().filter(|n| filter.matches(n)).collect();

    if notes.is_empty() {
        return writeln!(out, "No notes found.");
    }

    writeln!(out, "Notes:\n")?;
    for n in notes {
        writeln!(out, "  {:03} [{}] {}", n.id, n.origin, n.text)?;
        if !n.tags.is_empty() {
            writeln!(out, "      tags: {}", n.tag_list().join(", "))?;
        }
        if let Some(added) = n.created_display() {
            writeln!(out, "      added: {}", added)?;
        }
    }
    Ok(())
}

/// Byte length of the prefix of `rest` that case-folds to `needle`, if any.
fn folded_match_len(rest: &str, needle: &str) -> Option<usize> {
    let mut folded = String::new();
    for (idx, ch) in rest.char_indices() {
        folded.extend(ch.to_lowercase());
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
        if folded.len() == needle.len() {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

/// Wrap every case-insensitive occurrence of `query` in bold.
pub fn highlight_matches(text: &str, query: &str) -> String {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < text.len() {
        match folded_match_len(&text[i..], &needle) {
            Some(len) => {
                out.push_str(&text[copied..i]);
                out.push_str(BOLD);
                out.push_str(&text[i..i + len]);
                out.push_str(RESET);
                i += len;
                copied = i;
            }
            None => i += text[i..].chars().next().map_or(1, char::len_utf8),
        }
    }
    out.push_str(&text[copied..]);
    out
}

pub fn write_results<W: Write>(
    out: &mut W,
    query: &str,
    results: &[SearchResult],
    highlight: bool,
) -> io::Result<()> {
    writeln!(out, "Found {} notes for '{}':\n", results.len(), query.trim())?;
    for (rank, r) in results.iter().enumerate() {
        let text = if highlight {
            highlight_matches(&r.text, query)
        } else {
            r.text.clone()
        };
        writeln!(
            out,
            "  #{} [{:.0}% {}] {:03} {}",
            rank + 1,
            r.percent(),
            r.relevance(),
            r.id,
            text
        )?;
        if !r.tags.is_empty() {
            writeln!(out, "      tags: {}", r.tags)?;
        }
        if let Some(added) = r.created_display() {
            writeln!(out, "      added: {}", added)?;
        }
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &NoteStats) -> io::Result<()> {
    writeln!(out, "Total notes: {}", stats.total)?;
    writeln!(out, "Demo notes:  {}", stats.demo)?;
    writeln!(out, "Your notes:  {}", stats.user)
}

pub fn write_presets<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Preset queries:\n")?;
    for (i, (query, description)) in PRESET_QUERIES.iter().enumerate() {
        writeln!(out, "  {}. {} - {}", i + 1, query, description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::demo_notes;
    use crate::search::{search, SearchConfig};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_notes_filters_user() {
        let notes = demo_notes();
        let out = render(|w| write_notes(w, &notes, NoteFilter::User));
        assert_eq!(out, "No notes found.\n");

        let out = render(|w| write_notes(w, &notes, NoteFilter::Demo));
        assert!(out.contains("001 [demo] Запись к врачу"));
        assert!(out.contains("tags: медицина, врач"));
    }

    #[test]
    fn test_write_results_plain() {
        let notes = demo_notes();
        let results = search(&notes, "врач", &SearchConfig::default());
        let out = render(|w| write_results(w, "врач", &results, false));

        assert!(out.starts_with("Found 2 notes for 'врач'"));
        assert!(out.contains("#1 [100% high] 001"));
        assert!(out.contains("#2 [80% high] 002"));
        assert!(!out.contains(BOLD));
    }

    #[test]
    fn test_write_results_highlight() {
        let notes = demo_notes();
        let results = search(&notes, "булки", &SearchConfig::default());
        let out = render(|w| write_results(w, "булки", &results, true));
        assert!(out.contains("Купить свежие \x1b[1mбулки\x1b[0m к завтраку."));
    }

    #[test]
    fn test_highlight_matches_only_query_spans() {
        assert_eq!(
            highlight_matches("Aurora и снова aurora", " AURORA "),
            "\x1b[1mAurora\x1b[0m и снова \x1b[1maurora\x1b[0m"
        );
        assert_eq!(
            highlight_matches("Запись к врачу", "ВРАЧ"),
            "Запись к \x1b[1mврач\x1b[0mу"
        );
    }

    #[test]
    fn test_highlight_matches_without_hit() {
        assert_eq!(highlight_matches("Рецепт хлеба", "врач"), "Рецепт хлеба");
        assert_eq!(highlight_matches("Рецепт хлеба", "   "), "Рецепт хлеба");
    }

    #[test]
    fn test_write_presets() {
        let out = render(|w| write_presets(w));
        assert!(out.contains("1. врач"));
        assert!(out.contains("4. бегать"));
    }

    #[test]
    fn test_filter_from_flags() {
        assert_eq!(NoteFilter::from_flags(false, false), NoteFilter::All);
        assert_eq!(NoteFilter::from_flags(true, false), NoteFilter::User);
        assert_eq!(NoteFilter::from_flags(false, true), NoteFilter::Demo);
    }
}
