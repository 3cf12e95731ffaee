use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use domainboard_core::RecordStore;

use crate::handlers;

/// Collection path of the records API.
pub const API_PATH: &str = "/api/orders-status";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// Build the API router with permissive CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            API_PATH,
            get(handlers::list_records).post(handlers::create_record),
        )
        .route(
            &format!("{API_PATH}/{{id}}"),
            put(handlers::update_record).delete(handlers::delete_record),
        )
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
