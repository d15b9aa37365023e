//! Common routes: liveness and storage reachability.

use crate::handlers::health::{health, storage_health};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, GET /supabase/health. Unauthenticated.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/supabase/health", get(storage_health))
        .with_state(state)
}
