//! History handler

use axum::{extract::State, Json};

use crate::models::AnalysisResponse;
use crate::AppState;

/// Replay the assessments produced during this server session
pub async fn list(State(state): State<AppState>) -> Json<Vec<AnalysisResponse>> {
    Json(state.history.read().await.clone())
}
