use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::providers::MetadataProvider;
use crate::session::SessionState;
use crate::store::{Catalog, SimilarityMatrix};

/// Shared application state
///
/// Catalog and similarity matrix are immutable after load and freely shared
/// across sessions. Sessions are the only mutable structure; each one is
/// owned by a single client and lives behind the registry lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub similarity: Arc<SimilarityMatrix>,
    pub provider: Arc<dyn MetadataProvider>,
    pub sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            similarity: Arc::new(similarity),
            provider,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
