use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Image CDN base URL, including the resolution tier
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Poster path served when TMDB has no poster or the call fails
    #[serde(default = "default_poster")]
    pub default_poster: String,

    /// Locale passed to TMDB
    #[serde(default = "default_language")]
    pub language: String,

    /// Path to the catalog artifact
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the similarity matrix artifact
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_poster() -> String {
    "assets/default_poster.png".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_catalog_path() -> String {
    "artifacts/catalog.bin".to_string()
}

fn default_similarity_path() -> String {
    "artifacts/similarity.bin".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
