//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

/// Liveness route; the metrics path must not collide with it.
pub const HEALTHZ_PATH: &str = "/healthz";

pub fn build_router(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route(metrics_path, get(ops::metrics))
        .route(HEALTHZ_PATH, get(ops::healthz))
        .with_state(state)
}
