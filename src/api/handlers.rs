use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{MetadataRecord, SearchHistoryEntry};
use crate::services::{enrichment, recommendations};
use crate::session::SessionState;

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub selection: String,
    pub requested_count: usize,
}

/// Sidebar view of a session: recent searches plus statistics
#[derive(Debug, Serialize)]
pub struct SessionViewResponse {
    pub selection: String,
    pub requested_count: usize,
    pub recent_searches: Vec<SearchHistoryEntry>,
    pub total_searches: usize,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub matches: Vec<String>,
    pub selection: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CountRequest {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub requested_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub source_title: String,
    pub recommendations: Vec<MetadataRecord>,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("unknown session: {}", id))
}

// Handlers

/// Opens a new session defaulting to the first catalog title
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session = SessionState::new(&state.catalog);
    let session_id = Uuid::new_v4();

    let response = SessionCreatedResponse {
        session_id,
        selection: session.selection().to_string(),
        requested_count: session.requested_count(),
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id, session);

    tracing::info!(session_id = %session_id, "Session created");

    (StatusCode::CREATED, Json(response))
}

/// Returns the session's sidebar view
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionViewResponse>> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;

    Ok(Json(SessionViewResponse {
        selection: session.selection().to_string(),
        requested_count: session.requested_count(),
        recent_searches: session.recent_history(),
        total_searches: session.total_searches(),
    }))
}

/// Ends a session and discards its state, history included
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut sessions = state.sessions.write().await;
    sessions.remove(&id).ok_or_else(|| session_not_found(id))?;

    tracing::info!(session_id = %id, "Session ended");

    Ok(StatusCode::NO_CONTENT)
}

/// TypeQuery action: substring-filters catalog titles
pub async fn type_query(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    let matches = session.apply_query(&state.catalog, &request.text).to_vec();

    Ok(Json(QueryResponse {
        matches,
        selection: session.selection().to_string(),
    }))
}

/// SelectFromFiltered action
pub async fn select_title(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectRequest>,
) -> AppResult<StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    if session.select(&request.title) {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::InvalidInput(format!(
            "title not in current matches: {}",
            request.title
        )))
    }
}

/// SetCount action: the count is clamped, not rejected
pub async fn set_count(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CountRequest>,
) -> AppResult<Json<CountResponse>> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    Ok(Json(CountResponse {
        requested_count: session.set_count(request.count),
    }))
}

/// Submit action: records history, ranks, and enriches
///
/// The registry lock is released before any network call; only the history
/// append and the state reads happen under it.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmitResponse>> {
    let (source_title, count) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        (session.record_submission(), session.requested_count())
    };

    // A catalog of N movies can yield at most N-1 recommendations; small
    // catalogs return fewer results rather than an error
    let effective_count = count.min(state.catalog.len().saturating_sub(1));
    let ranked = if effective_count == 0 {
        Vec::new()
    } else {
        recommendations::recommend(
            &state.catalog,
            &state.similarity,
            &source_title,
            effective_count,
        )?
    };
    let recommendations = enrichment::enrich(state.provider.as_ref(), ranked).await;

    tracing::info!(
        session_id = %id,
        title = %source_title,
        results = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(SubmitResponse {
        source_title,
        recommendations,
    }))
}
