use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, ticketing};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Pool status and capacity limits
        .route("/status", get(ticketing::get_status))
        .route("/limits/event", post(ticketing::set_event_limit))
        .route("/limits/pool", post(ticketing::set_pool_limit))
        // Actor lifecycle
        .route("/vendors", post(ticketing::start_vendor))
        .route("/customers", post(ticketing::start_customer))
        .route("/stop", post(ticketing::stop_all))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
