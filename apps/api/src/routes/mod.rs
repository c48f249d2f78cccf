pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers::handle_export_rpp;
use crate::rpp::handlers::handle_generate_rpp;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-rpp", post(handle_generate_rpp))
        .route("/api/export-rpp", post(handle_export_rpp))
        .with_state(state)
}
