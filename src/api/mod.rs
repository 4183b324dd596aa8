//! HTTP API module
//! 
//! This module exposes the widget's visual surface and control presses.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/view", get(view_handler))
        .route("/mode/:mode", post(mode_handler))
        .route("/stopwatch/toggle", post(stopwatch_toggle_handler))
        .route("/stopwatch/pause", post(stopwatch_pause_handler))
        .route("/countdown/input", put(countdown_input_handler))
        .route("/countdown/start", post(countdown_start_handler))
        .route("/countdown/stop", post(countdown_stop_handler))
        .route("/countdown/pause", post(countdown_pause_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
