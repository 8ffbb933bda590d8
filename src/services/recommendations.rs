use crate::error::{AppError, AppResult};
use crate::models::RankedTitle;
use crate::store::{Catalog, SimilarityMatrix};

/// Ranks every other catalog entry by similarity to `title` and returns the
/// top `count` as (movie_id, title) pairs.
///
/// Resolution is exact-match on the first catalog row with that title;
/// substring matching belongs to the session layer. The sort is stable and
/// descending by score, so ties resolve by ascending catalog position. The
/// query's own row is filtered out by index rather than assumed to sit at
/// the top of the ranking, so a score tie with another entry can never leak
/// the queried movie into its own results.
///
/// Pure function of its inputs; no side effects.
pub fn recommend(
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    title: &str,
    count: usize,
) -> AppResult<Vec<RankedTitle>> {
    let row_index = catalog
        .position_of(title)
        .ok_or_else(|| AppError::NotFound(format!("title not in catalog: {}", title)))?;

    let max_count = catalog.len() - 1;
    if count == 0 || count > max_count {
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {}, got {}",
            max_count, count
        )));
    }

    let row = similarity
        .row(row_index)
        .ok_or_else(|| AppError::Internal(format!("similarity row {} out of bounds", row_index)))?;

    let mut scored: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
    // Stable sort: equal scores keep ascending-index order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let ranked = scored
        .into_iter()
        .filter(|(index, _)| *index != row_index)
        .take(count)
        .filter_map(|(index, _)| catalog.get(index))
        .map(|entry| RankedTitle {
            movie_id: entry.movie_id,
            title: entry.title.clone(),
        })
        .collect();

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;

    fn catalog(titles: &[(u64, &str)]) -> Catalog {
        Catalog::new(
            titles
                .iter()
                .map(|(movie_id, title)| CatalogEntry {
                    movie_id: *movie_id,
                    title: title.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn matrix(rows: &[&[f32]]) -> SimilarityMatrix {
        let dim = rows.len();
        let scores: Vec<f32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        SimilarityMatrix::new(dim, scores).unwrap()
    }

    #[test]
    fn test_recommend_basic_ranking() {
        let catalog = catalog(&[(1, "Avatar"), (2, "Alien"), (3, "Aliens")]);
        let similarity = matrix(&[
            &[1.0, 0.9, 0.8],
            &[0.9, 1.0, 0.95],
            &[0.8, 0.95, 1.0],
        ]);

        let ranked = recommend(&catalog, &similarity, "Avatar", 2).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(ranked[0].title, "Alien");
        assert_eq!(ranked[1].title, "Aliens");
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let catalog = catalog(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);
        let similarity = matrix(&[
            &[1.0, 0.5, 0.5, 0.5],
            &[0.5, 1.0, 0.5, 0.5],
            &[0.5, 0.5, 1.0, 0.5],
            &[0.5, 0.5, 0.5, 1.0],
        ]);

        let first = recommend(&catalog, &similarity, "A", 3).unwrap();
        let second = recommend(&catalog, &similarity, "A", 3).unwrap();
        assert_eq!(first, second);
        // All scores tie, so order falls back to ascending catalog position
        let ids: Vec<u64> = first.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_recommend_excludes_self_even_on_score_tie() {
        // Row for "B" ties its self-score with "A": a positional drop of the
        // top entry would remove "A" and keep "B" in its own results
        let catalog = catalog(&[(1, "A"), (2, "B"), (3, "C")]);
        let similarity = matrix(&[
            &[1.0, 1.0, 0.2],
            &[1.0, 1.0, 0.5],
            &[0.2, 0.5, 1.0],
        ]);

        let ranked = recommend(&catalog, &similarity, "B", 2).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_recommend_returns_distinct_ids() {
        let catalog = catalog(&[(10, "A"), (20, "B"), (30, "C"), (40, "D")]);
        let similarity = matrix(&[
            &[1.0, 0.7, 0.9, 0.8],
            &[0.7, 1.0, 0.6, 0.5],
            &[0.9, 0.6, 1.0, 0.4],
            &[0.8, 0.5, 0.4, 1.0],
        ]);

        let ranked = recommend(&catalog, &similarity, "A", 3).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![30, 40, 20]);
        assert!(!ids.contains(&10));
    }

    #[test]
    fn test_recommend_unknown_title() {
        let catalog = catalog(&[(1, "Avatar"), (2, "Alien")]);
        let similarity = matrix(&[&[1.0, 0.9], &[0.9, 1.0]]);

        let result = recommend(&catalog, &similarity, "avatar", 1);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_recommend_count_out_of_range() {
        let catalog = catalog(&[(1, "A"), (2, "B"), (3, "C")]);
        let similarity = matrix(&[
            &[1.0, 0.9, 0.8],
            &[0.9, 1.0, 0.7],
            &[0.8, 0.7, 1.0],
        ]);

        assert!(matches!(
            recommend(&catalog, &similarity, "A", 0),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            recommend(&catalog, &similarity, "A", 3),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_recommend_duplicate_title_uses_first_row() {
        let catalog = catalog(&[(1, "Alien"), (2, "Alien"), (3, "Aliens")]);
        let similarity = matrix(&[
            &[1.0, 0.2, 0.9],
            &[0.2, 1.0, 0.3],
            &[0.9, 0.3, 1.0],
        ]);

        let ranked = recommend(&catalog, &similarity, "Alien", 2).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.movie_id).collect();
        // Ranked from row 0, so the second "Alien" is an ordinary candidate
        assert_eq!(ids, vec![3, 2]);
    }
}
