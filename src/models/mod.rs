use serde::{Deserialize, Serialize};

/// One row of the movie catalog
///
/// Row position in the catalog doubles as the index into the similarity
/// matrix. `movie_id` is the TMDB identifier, distinct from the row position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub movie_id: u64,
    pub title: String,
}

/// A ranked recommendation before metadata enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTitle {
    pub movie_id: u64,
    pub title: String,
}

/// Normalized, display-ready movie details returned to the client
///
/// String fields fall back to "N/A" when TMDB has no value; `tagline` may be
/// empty. `name` is the catalog title, attached after the fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub name: String,
    pub poster: String,
    pub rating: f64,
    pub year: String,
    pub runtime: String,
    pub genres: String,
    pub overview: String,
    pub vote_count: u64,
    pub popularity: f64,
    pub language: String,
    pub status: String,
    pub tagline: String,
}

/// One past lookup in a session's search history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHistoryEntry {
    pub title: String,
    pub timestamp: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from GET /movie/{id}
///
/// Every field is optional: TMDB omits or nulls fields freely, and the
/// normalization step supplies per-field defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}
