/// TMDB metadata provider
///
/// One GET per movie id with the configured key and locale; no retries and
/// no response caching. Non-success statuses and transport failures surface
/// as `AppError` and are degraded by the enrichment layer, not here.
use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MetadataRecord, TmdbMovieDetails},
    services::providers::MetadataProvider,
};

/// Overview shown when a successful response carries no overview
const MISSING_OVERVIEW: &str = "No overview available.";
/// Overview shown when the whole call failed
const FAILED_OVERVIEW: &str = "Details not available.";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
    default_poster: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.tmdb_api_key.clone(),
            api_url: config.tmdb_api_url.clone(),
            image_base_url: config.image_base_url.clone(),
            default_poster: config.default_poster.clone(),
            language: config.language.clone(),
        }
    }

    /// Maps a raw TMDB response into the display-ready record shape
    ///
    /// Each missing sub-field gets its own default; the catalog title is
    /// attached later by the enrichment layer, so `name` starts empty.
    fn normalize(&self, details: TmdbMovieDetails) -> MetadataRecord {
        let poster = match details.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", self.image_base_url, path),
            _ => self.default_poster.clone(),
        };

        let year = details
            .release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .map(str::to_string)
            .unwrap_or_else(|| "N/A".to_string());

        let runtime = details
            .runtime
            .map(|minutes| minutes.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let genres = if details.genres.is_empty() {
            "N/A".to_string()
        } else {
            details
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let overview = details
            .overview
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| MISSING_OVERVIEW.to_string());

        let language = details
            .original_language
            .filter(|l| !l.is_empty())
            .map(|l| l.to_uppercase())
            .unwrap_or_else(|| "N/A".to_string());

        let status = details
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "N/A".to_string());

        MetadataRecord {
            name: String::new(),
            poster,
            rating: round_one_decimal(details.vote_average.unwrap_or(0.0)),
            year,
            runtime,
            genres,
            overview,
            vote_count: details.vote_count.unwrap_or(0),
            popularity: round_one_decimal(details.popularity.unwrap_or(0.0)),
            language,
            status,
            tagline: details.tagline.unwrap_or_default(),
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_details(&self, movie_id: u64) -> AppResult<MetadataRecord> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for movie {}: {}",
                status, movie_id, body
            )));
        }

        let details: TmdbMovieDetails = response.json().await?;
        let record = self.normalize(details);

        tracing::debug!(movie_id = movie_id, provider = "tmdb", "Movie details fetched");

        Ok(record)
    }

    fn fallback_record(&self) -> MetadataRecord {
        MetadataRecord {
            name: String::new(),
            poster: self.default_poster.clone(),
            rating: 0.0,
            year: "N/A".to_string(),
            runtime: "N/A".to_string(),
            genres: "N/A".to_string(),
            overview: FAILED_OVERVIEW.to_string(),
            vote_count: 0,
            popularity: 0.0,
            language: "N/A".to_string(),
            status: "N/A".to_string(),
            tagline: String::new(),
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
