// GET handlers: health checks and clan data

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;

/// Service name and version (from Cargo.toml at build time).
const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET / — liveness probe.
pub(super) async fn health_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
        "message": "Clan data server is running",
    }))
}

/// GET /health — extended health check with service identity.
pub(super) async fn health_extended_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
        "message": "Clan data server is running",
        "service": NAME,
        "version": VERSION,
    }))
}

/// GET /api/clan-data — the full clan summary, freshly collected; 500 with
/// a generic error body when the summary cannot be assembled.
pub(super) async fn clan_data_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collector.clan_summary().await {
        Some(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(serde_json::json!({ "error": "Failed to fetch clan data" })),
        )
            .into_response(),
    }
}
