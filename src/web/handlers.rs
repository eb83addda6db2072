//! HTTP request handlers

use super::state::AppState;
use crate::results::SearchOutcome;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::debug;

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Autocomplete query parameters
#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    #[serde(default)]
    pub q: String,
}

/// Autocomplete handler.
///
/// Runs one search per request; debouncing is the caller's job. Input
/// shorter than the activation threshold answers with empty results
/// without touching the provider.
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Json<SearchOutcome> {
    if params.q.chars().count() < crate::MIN_QUERY_LEN {
        debug!("autocomplete query {:?} below threshold", params.q);
        return Json(SearchOutcome::default());
    }

    Json(state.provider.search(&params.q).await)
}
