use chrono::Local;

use crate::models::SearchHistoryEntry;
use crate::store::Catalog;

pub const MIN_RECOMMENDATIONS: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 10;
pub const DEFAULT_RECOMMENDATIONS: usize = 5;
/// Sidebar shows this many recent searches, most recent first
pub const RECENT_HISTORY_LIMIT: usize = 5;

const HISTORY_TIMESTAMP_FORMAT: &str = "%I:%M %p, %b %d";

/// Transient per-session interaction state
///
/// Owned by exactly one session and never shared across sessions; discarded
/// when the session ends. The selection invariant: `selection` always names
/// a catalog title, starting from the first catalog entry.
#[derive(Debug, Clone)]
pub struct SessionState {
    query: String,
    selection: String,
    filtered: Vec<String>,
    history: Vec<SearchHistoryEntry>,
    requested_count: usize,
}

impl SessionState {
    /// New session defaulting to the first catalog title
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            query: String::new(),
            selection: catalog.first_title().to_string(),
            filtered: Vec::new(),
            history: Vec::new(),
            requested_count: DEFAULT_RECOMMENDATIONS,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn history(&self) -> &[SearchHistoryEntry] {
        &self.history
    }

    /// TypeQuery: stores the text and refreshes the filtered title list
    ///
    /// The selection is never touched here; only an explicit
    /// SelectFromFiltered changes it. An empty query clears the filter.
    pub fn apply_query(&mut self, catalog: &Catalog, text: &str) -> &[String] {
        self.query = text.to_string();
        self.filtered = if text.is_empty() {
            Vec::new()
        } else {
            catalog.filter_titles(text)
        };
        &self.filtered
    }

    /// SelectFromFiltered: only titles surfaced by the last query are valid
    pub fn select(&mut self, title: &str) -> bool {
        if self.filtered.iter().any(|t| t == title) {
            self.selection = title.to_string();
            true
        } else {
            false
        }
    }

    /// SetCount: clamps the requested count to the allowed range
    pub fn set_count(&mut self, count: usize) -> usize {
        self.requested_count = count.clamp(MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS);
        self.requested_count
    }

    /// Records a Submit in the search history and returns the title to
    /// recommend for
    pub fn record_submission(&mut self) -> String {
        let timestamp = Local::now().format(HISTORY_TIMESTAMP_FORMAT).to_string();
        self.history.push(SearchHistoryEntry {
            title: self.selection.clone(),
            timestamp,
        });
        self.selection.clone()
    }

    /// Last `RECENT_HISTORY_LIMIT` history entries, most recent first
    pub fn recent_history(&self) -> Vec<SearchHistoryEntry> {
        self.history
            .iter()
            .rev()
            .take(RECENT_HISTORY_LIMIT)
            .cloned()
            .collect()
    }

    pub fn total_searches(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;

    fn catalog() -> Catalog {
        Catalog::new(
            [
                (1, "Avatar"),
                (2, "Alien"),
                (3, "Aliens"),
                (4, "Titanic"),
            ]
            .iter()
            .map(|(movie_id, title)| CatalogEntry {
                movie_id: *movie_id,
                title: title.to_string(),
            })
            .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = SessionState::new(&catalog());
        assert_eq!(session.selection(), "Avatar");
        assert_eq!(session.requested_count(), DEFAULT_RECOMMENDATIONS);
        assert_eq!(session.total_searches(), 0);
    }

    #[test]
    fn test_query_filters_without_touching_selection() {
        let catalog = catalog();
        let mut session = SessionState::new(&catalog);

        let matches = session.apply_query(&catalog, "alien").to_vec();
        assert_eq!(matches, vec!["Alien", "Aliens"]);
        assert_eq!(session.selection(), "Avatar");
    }

    #[test]
    fn test_empty_query_keeps_selection() {
        let catalog = catalog();
        let mut session = SessionState::new(&catalog);

        session.apply_query(&catalog, "alien");
        assert!(session.select("Aliens"));

        let matches = session.apply_query(&catalog, "").to_vec();
        assert!(matches.is_empty());
        assert_eq!(session.selection(), "Aliens");
    }

    #[test]
    fn test_query_with_no_matches_keeps_selection() {
        let catalog = catalog();
        let mut session = SessionState::new(&catalog);

        let matches = session.apply_query(&catalog, "zzz").to_vec();
        assert!(matches.is_empty());
        assert_eq!(session.selection(), "Avatar");
    }

    #[test]
    fn test_select_requires_filtered_membership() {
        let catalog = catalog();
        let mut session = SessionState::new(&catalog);

        session.apply_query(&catalog, "alien");
        // "Titanic" is a catalog title but was not surfaced by this query
        assert!(!session.select("Titanic"));
        assert_eq!(session.selection(), "Avatar");

        assert!(session.select("Alien"));
        assert_eq!(session.selection(), "Alien");
    }

    #[test]
    fn test_set_count_clamps() {
        let mut session = SessionState::new(&catalog());

        assert_eq!(session.set_count(15), 10);
        assert_eq!(session.set_count(1), 3);
        assert_eq!(session.set_count(7), 7);
    }

    #[test]
    fn test_submission_appends_exactly_one_history_entry() {
        let mut session = SessionState::new(&catalog());

        let title = session.record_submission();
        assert_eq!(title, "Avatar");
        assert_eq!(session.total_searches(), 1);
        assert_eq!(session.history()[0].title, "Avatar");
        assert!(!session.history()[0].timestamp.is_empty());

        session.record_submission();
        assert_eq!(session.total_searches(), 2);
    }

    #[test]
    fn test_recent_history_is_last_five_reversed() {
        let catalog = catalog();
        let mut session = SessionState::new(&catalog);

        for title in ["Avatar", "Alien", "Aliens", "Titanic", "Avatar", "Alien"] {
            session.apply_query(&catalog, title);
            session.select(title);
            session.record_submission();
        }

        let recent = session.recent_history();
        assert_eq!(recent.len(), RECENT_HISTORY_LIMIT);
        let titles: Vec<&str> = recent.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Avatar", "Titanic", "Aliens", "Alien"]);
        assert_eq!(session.total_searches(), 6);
    }
}
