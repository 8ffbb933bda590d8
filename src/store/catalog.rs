use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::CatalogEntry;

/// Maximum number of titles surfaced by a substring filter
pub const MAX_FILTER_RESULTS: usize = 10;

/// Read-only movie catalog, fully resident after load
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::Artifact("catalog artifact is empty".to_string()));
        }
        Ok(Self { entries })
    }

    /// Loads the catalog artifact from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::Artifact(format!(
                "opening catalog artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);

        let entries: Vec<CatalogEntry> = bincode::deserialize_from(reader).map_err(|e| {
            AppError::Artifact(format!(
                "decoding catalog artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    /// Row position of the first entry whose title matches exactly
    ///
    /// Titles are not guaranteed unique; first match wins.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.title == title)
    }

    /// Default selection for a fresh session
    pub fn first_title(&self) -> &str {
        &self.entries[0].title
    }

    /// Case-insensitive substring filter over titles, in catalog order,
    /// truncated to `MAX_FILTER_RESULTS`
    pub fn filter_titles(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .take(MAX_FILTER_RESULTS)
            .map(|e| e.title.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry {
                movie_id: 1,
                title: "Avatar".to_string(),
            },
            CatalogEntry {
                movie_id: 2,
                title: "Alien".to_string(),
            },
            CatalogEntry {
                movie_id: 3,
                title: "Aliens".to_string(),
            },
        ]
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.bin");

        let file = File::create(&path).unwrap();
        bincode::serialize_into(BufWriter::new(file), &sample_entries()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.first_title(), "Avatar");
        assert_eq!(catalog.get(2).unwrap().movie_id, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.bin"));
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }

    #[test]
    fn test_load_malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.bin");
        std::fs::write(&path, b"\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();

        let result = Catalog::load(&path);
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(Vec::new());
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }

    #[test]
    fn test_position_of_first_match() {
        let mut entries = sample_entries();
        entries.push(CatalogEntry {
            movie_id: 4,
            title: "Alien".to_string(),
        });
        let catalog = Catalog::new(entries).unwrap();

        // Duplicate title resolves to the first row
        assert_eq!(catalog.position_of("Alien"), Some(1));
        assert_eq!(catalog.position_of("No Such Movie"), None);
    }

    #[test]
    fn test_filter_titles_case_insensitive_substring() {
        let catalog = Catalog::new(sample_entries()).unwrap();

        assert_eq!(catalog.filter_titles("alien"), vec!["Alien", "Aliens"]);
        assert_eq!(catalog.filter_titles("AVA"), vec!["Avatar"]);
        assert!(catalog.filter_titles("zzz").is_empty());
    }

    #[test]
    fn test_filter_titles_truncates() {
        let entries: Vec<CatalogEntry> = (0..25)
            .map(|i| CatalogEntry {
                movie_id: i,
                title: format!("Movie {}", i),
            })
            .collect();
        let catalog = Catalog::new(entries).unwrap();

        let matches = catalog.filter_titles("movie");
        assert_eq!(matches.len(), MAX_FILTER_RESULTS);
        // Catalog order is preserved
        assert_eq!(matches[0], "Movie 0");
        assert_eq!(matches[9], "Movie 9");
    }
}
