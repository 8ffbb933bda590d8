use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinematch::api::{create_router, AppState};
use cinematch::config::Config;
use cinematch::services::providers::tmdb::TmdbProvider;
use cinematch::store::{Catalog, SimilarityMatrix};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Both artifacts are fully resident; a missing, malformed, or
    // dimension-mismatched artifact means the process cannot serve at all
    let catalog =
        Catalog::load(Path::new(&config.catalog_path)).context("loading catalog artifact")?;
    let similarity = SimilarityMatrix::load(Path::new(&config.similarity_path), catalog.len())
        .context("loading similarity artifact")?;

    tracing::info!(
        movies = catalog.len(),
        "Catalog and similarity artifacts loaded"
    );

    let provider = Arc::new(TmdbProvider::new(&config));
    let state = AppState::new(catalog, similarity, provider);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
