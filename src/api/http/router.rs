// src/api/http/router.rs
// Router composition: the two pipelines plus health, behind permissive CORS
// for the browser frontend.

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::health_handler;
use super::respond::respond_handler;
use super::transcribe::transcribe_handler;
use crate::state::AppState;

pub fn http_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/respond", post(respond_handler))
        .route("/transcribe", post(transcribe_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
