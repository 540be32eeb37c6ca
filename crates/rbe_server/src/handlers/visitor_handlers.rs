use axum::{Json, extract::State};

use super::AppState;
use crate::error::ApiResult;
use crate::models::CountResponse;

// ============================================================================
// Visitor Handlers
// ============================================================================

/// `GET /api/visitors`
pub async fn get_visitors(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let counter = state.counter.clone();
    let count = tokio::task::spawn_blocking(move || counter.get()).await?;

    Ok(Json(CountResponse { count }))
}

/// `POST /api/visitors`
pub async fn record_visit(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let counter = state.counter.clone();
    let count = tokio::task::spawn_blocking(move || counter.increment()).await??;

    tracing::info!(count, "visit recorded");
    Ok(Json(CountResponse { count }))
}
