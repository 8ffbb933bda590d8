use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Dense row-major similarity matrix, square, indexed by catalog position
///
/// Only row access is exposed. The matrix is symmetric in practice but
/// nothing here assumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn new(dim: usize, scores: Vec<f32>) -> AppResult<Self> {
        if scores.len() != dim * dim {
            return Err(AppError::Artifact(format!(
                "similarity matrix has {} scores, expected {} for dimension {}",
                scores.len(),
                dim * dim,
                dim
            )));
        }
        Ok(Self { dim, scores })
    }

    /// Loads the similarity artifact and checks it against the catalog size
    pub fn load(path: &Path, expected_dim: usize) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::Artifact(format!(
                "opening similarity artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);

        let matrix: SimilarityMatrix = bincode::deserialize_from(reader).map_err(|e| {
            AppError::Artifact(format!(
                "decoding similarity artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        if matrix.dim != expected_dim {
            return Err(AppError::Artifact(format!(
                "similarity dimension {} does not match catalog size {}",
                matrix.dim, expected_dim
            )));
        }
        if matrix.scores.len() != matrix.dim * matrix.dim {
            return Err(AppError::Artifact(format!(
                "similarity artifact is truncated: {} scores for dimension {}",
                matrix.scores.len(),
                matrix.dim
            )));
        }

        Ok(matrix)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Similarity scores between catalog row `index` and every catalog row
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.dim {
            return None;
        }
        let start = index * self.dim;
        Some(&self.scores[start..start + self.dim])
    }
}
