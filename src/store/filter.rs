//! Search state and the filter that derives the displayed view.

use crate::domain::Note;

/// Live search state: a query string and an active flag.
///
/// Inactive means no search has been performed or the user cleared it; in
/// that state the displayed view equals the full collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    active: bool,
}

impl SearchState {
    /// Creates an inactive search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the search with the given query.
    pub fn activate(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.active = true;
    }

    /// Clears the search, restoring the full view. Idempotent.
    pub fn clear(&mut self) {
        self.query.clear();
        self.active = false;
    }

    /// Returns whether a search is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current query text.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Derives the displayed subset of notes from the search state.
///
/// Pure function: inactive or blank-query state yields the collection
/// unchanged; an active query keeps notes whose title or content contains
/// it case-insensitively, in collection order. Pin and tag changes never
/// affect the result.
pub fn filter_notes<'a>(notes: &'a [Note], search: &SearchState) -> Vec<&'a Note> {
    if !search.is_active() || search.query().trim().is_empty() {
        return notes.iter().collect();
    }

    let query = search.query().to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title().to_lowercase().contains(&query)
                || note.content().to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn note(id: &str, title: &str, content: &str) -> Note {
        let id: NoteId = id.parse().unwrap();
        let created: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-06-01T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Note::new(id, title, content, created).unwrap()
    }

    fn sample_collection() -> Vec<Note> {
        vec![
            note("1a", "Groceries", "milk, eggs"),
            note("2b", "Work", "finish report"),
        ]
    }

    #[test]
    fn inactive_search_is_the_identity() {
        let notes = sample_collection();
        let state = SearchState::new();

        let displayed = filter_notes(&notes, &state);
        assert_eq!(displayed.len(), notes.len());
        for (shown, original) in displayed.iter().zip(&notes) {
            assert_eq!(*shown, original);
        }
    }

    #[test]
    fn active_blank_query_is_the_identity() {
        let notes = sample_collection();
        let mut state = SearchState::new();
        state.activate("   ");

        assert_eq!(filter_notes(&notes, &state).len(), notes.len());
    }

    #[test]
    fn query_matches_title_or_content() {
        let notes = sample_collection();
        let mut state = SearchState::new();

        state.activate("milk");
        let displayed = filter_notes(&notes, &state);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].title(), "Groceries");

        state.activate("work");
        let displayed = filter_notes(&notes, &state);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].title(), "Work");
    }

    #[test]
    fn every_match_has_query_as_substring() {
        let notes = vec![
            note("1a", "Alpha", "nothing here"),
            note("2b", "Beta", "alpha inside content"),
            note("3c", "Gamma", "unrelated"),
        ];
        let mut state = SearchState::new();
        state.activate("alpha");

        let displayed = filter_notes(&notes, &state);
        assert_eq!(displayed.len(), 2);
        for shown in &displayed {
            let hit = shown.title().to_lowercase().contains("alpha")
                || shown.content().to_lowercase().contains("alpha");
            assert!(hit, "'{}' should contain the query", shown.title());
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let notes = sample_collection();
        let mut state = SearchState::new();
        state.activate("GROCERIES");

        let displayed = filter_notes(&notes, &state);
        assert_eq!(displayed.len(), 1);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let notes = sample_collection();
        let mut state = SearchState::new();
        state.activate("nonexistent");

        assert!(filter_notes(&notes, &state).is_empty());
    }

    #[test]
    fn collection_order_is_preserved() {
        let notes = vec![
            note("1a", "report alpha", "x"),
            note("2b", "other", "report beta"),
            note("3c", "report gamma", "y"),
        ];
        let mut state = SearchState::new();
        state.activate("report");

        let titles: Vec<_> = filter_notes(&notes, &state)
            .iter()
            .map(|n| n.title())
            .collect();
        assert_eq!(titles, vec!["report alpha", "other", "report gamma"]);
    }

    #[test]
    fn clearing_search_restores_the_full_view() {
        let notes = sample_collection();
        let mut state = SearchState::new();

        state.activate("milk");
        assert_eq!(filter_notes(&notes, &state).len(), 1);

        state.clear();
        assert_eq!(filter_notes(&notes, &state).len(), 2);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = SearchState::new();
        state.activate("milk");

        state.clear();
        let after_one = state.clone();
        state.clear();

        assert_eq!(state, after_one);
        assert_eq!(state.query(), "");
        assert!(!state.is_active());
    }

    #[test]
    fn filtering_is_stable_under_pin_changes() {
        let pinned = {
            let id: NoteId = "1a".parse().unwrap();
            let created = DateTime::parse_from_rfc3339("2024-06-01T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc);
            Note::builder(id, "Groceries", "milk, eggs", created)
                .pinned(true)
                .build()
                .unwrap()
        };
        let notes = vec![pinned, note("2b", "Work", "finish report")];

        let mut state = SearchState::new();
        state.activate("milk");

        // Same result as with the unpinned variant of the note.
        let displayed = filter_notes(&notes, &state);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].title(), "Groceries");
    }
}
