/// Movie metadata source abstraction
///
/// Submit enriches each recommended title through this seam, so swapping the
/// remote service, or mocking it in tests, only touches the implementation.
use crate::error::AppResult;
use crate::models::MetadataRecord;

pub mod tmdb;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetches and normalizes display details for one movie id
    ///
    /// Errors are returned to the caller; the enrichment layer decides how
    /// to degrade. `fallback_record` exists for exactly that purpose.
    async fn fetch_details(&self, movie_id: u64) -> AppResult<MetadataRecord>;

    /// Complete placeholder record used when a fetch fails outright
    fn fallback_record(&self) -> MetadataRecord;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
