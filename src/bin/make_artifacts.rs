//! Builds the binary artifacts the server loads at startup from a JSON seed,
//! for local runs without the upstream similarity pipeline.
//!
//! Seed shape: `{ "movies": [{ "movie_id": 1, "title": "..." }, ...],
//! "similarity": [[...], ...] }` with one square row per movie. Extra
//! columns from upstream exports are dropped before this step.

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::{bail, Context};
use serde::Deserialize;

use cinematch::models::CatalogEntry;
use cinematch::store::SimilarityMatrix;

#[derive(Debug, Deserialize)]
struct Seed {
    movies: Vec<CatalogEntry>,
    similarity: Vec<Vec<f32>>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        bail!("usage: make_artifacts <seed.json> <catalog.bin> <similarity.bin>");
    }

    let seed_file = File::open(&args[1]).with_context(|| format!("opening seed {}", args[1]))?;
    let seed: Seed =
        serde_json::from_reader(BufReader::new(seed_file)).context("parsing seed JSON")?;

    let dim = seed.movies.len();
    if seed.similarity.len() != dim {
        bail!(
            "similarity has {} rows, catalog has {} movies",
            seed.similarity.len(),
            dim
        );
    }

    let mut scores = Vec::with_capacity(dim * dim);
    for (row_index, row) in seed.similarity.iter().enumerate() {
        if row.len() != dim {
            bail!(
                "similarity row {} has {} columns, expected {}",
                row_index,
                row.len(),
                dim
            );
        }
        scores.extend_from_slice(row);
    }
    let matrix = SimilarityMatrix::new(dim, scores)?;

    let catalog_file =
        File::create(&args[2]).with_context(|| format!("creating {}", args[2]))?;
    bincode::serialize_into(BufWriter::new(catalog_file), &seed.movies)
        .context("writing catalog artifact")?;

    let similarity_file =
        File::create(&args[3]).with_context(|| format!("creating {}", args[3]))?;
    bincode::serialize_into(BufWriter::new(similarity_file), &matrix)
        .context("writing similarity artifact")?;

    println!(
        "wrote {} movies to {} and a {}x{} matrix to {}",
        dim, args[2], dim, dim, args[3]
    );

    Ok(())
}
