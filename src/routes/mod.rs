// HTTP routes

mod http;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::collector::Collector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<Collector>,
}

pub fn app(collector: Arc<Collector>) -> Router {
    let state = AppState { collector };
    Router::new()
        .route("/", get(http::health_handler)) // GET /
        .route("/health", get(http::health_extended_handler)) // GET /health
        .route("/api/clan-data", get(http::clan_data_handler)) // GET /api/clan-data
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
