//! Advisor endpoints: search, idea match, ITN scoring, reading path.
//!
//! Validation shortfalls return HTTP 200 with a zero-confidence payload
//! and never invoke the model. Upstream failures return HTTP 500 with a
//! fixed-shape payload and no diagnostic detail.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::error;

use crate::domains::advisor::service::{
    MIN_DESCRIPTION_LEN, MIN_IDEA_LEN, MIN_QUERY_LEN, MIN_TITLE_LEN, MIN_TOPIC_LEN,
};
use crate::domains::advisor::{ItnResponse, MatchResponse, ReadingResponse, SearchResponse};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// POST /api/search
pub async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> (StatusCode, Json<SearchResponse>) {
    if req.query.trim().chars().count() < MIN_QUERY_LEN {
        return (StatusCode::OK, Json(SearchResponse::insufficient_input()));
    }

    match state.relevance.search(&req.query).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            error!(error = %e, "search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchResponse::error_fallback()),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub idea: String,
}

/// POST /api/match
pub async fn idea_match_handler(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> (StatusCode, Json<MatchResponse>) {
    if req.idea.trim().chars().count() < MIN_IDEA_LEN {
        return (StatusCode::OK, Json(MatchResponse::insufficient_input()));
    }

    match state.advisor.match_idea(&req.idea).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            error!(error = %e, "idea match failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MatchResponse::error_fallback()),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItnRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// POST /api/itn
pub async fn itn_handler(
    State(state): State<AppState>,
    Json(req): Json<ItnRequest>,
) -> (StatusCode, Json<ItnResponse>) {
    if req.title.chars().count() < MIN_TITLE_LEN
        || req.description.chars().count() < MIN_DESCRIPTION_LEN
    {
        return (StatusCode::OK, Json(ItnResponse::insufficient_input()));
    }

    match state.advisor.itn(&req.title, &req.description).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            error!(error = %e, "ITN analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ItnResponse::error_fallback()),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub background: String,
}

/// POST /api/reading
pub async fn reading_handler(
    State(state): State<AppState>,
    Json(req): Json<ReadingRequest>,
) -> (StatusCode, Json<ReadingResponse>) {
    if req.topic.trim().chars().count() < MIN_TOPIC_LEN {
        return (
            StatusCode::OK,
            Json(ReadingResponse::insufficient_input(&req.topic)),
        );
    }

    match state
        .advisor
        .reading_path(&req.topic, &req.background)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            error!(error = %e, "reading path generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReadingResponse::error_fallback()),
            )
        }
    }
}
