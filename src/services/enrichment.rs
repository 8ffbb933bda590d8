use crate::models::{MetadataRecord, RankedTitle};
use crate::services::providers::MetadataProvider;

/// Resolves each ranked title to a display record, preserving rank order.
///
/// Fetches run sequentially, one request per item, even when a movie id
/// repeats. A failed fetch degrades to the provider's fallback record for
/// that one item and is logged with its cause; the rest of the batch renders
/// normally and the caller never sees an error.
pub async fn enrich(
    provider: &dyn MetadataProvider,
    ranked: Vec<RankedTitle>,
) -> Vec<MetadataRecord> {
    let total = ranked.len();
    let mut records = Vec::with_capacity(total);
    let mut failures = 0usize;

    for item in ranked {
        let mut record = match provider.fetch_details(item.movie_id).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    movie_id = item.movie_id,
                    provider = provider.name(),
                    error = %e,
                    "Metadata fetch failed, using fallback record"
                );
                failures += 1;
                provider.fallback_record()
            }
        };
        record.name = item.title;
        records.push(record);
    }

    if failures > 0 {
        tracing::warn!(
            success_count = total - failures,
            error_count = failures,
            "Partial metadata fetch failure"
        );
    }

    records
}
