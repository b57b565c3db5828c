// HTTP request handlers
use crate::domain::dashboard::InvocationResult;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Run the pipeline once and report the outcome
pub async fn refresh_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.dashboard_service.refresh().await {
        Ok(_) => (StatusCode::OK, Json(InvocationResult::success())),
        Err(e) => {
            tracing::error!("Dashboard refresh failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InvocationResult::failure(e.to_string())),
            )
        }
    }
}
