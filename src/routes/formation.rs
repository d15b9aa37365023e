//! Formation CRUD routes.

use crate::handlers::formation::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn formation_routes(state: AppState) -> Router {
    Router::new()
        .route("/formations", get(list).post(create))
        .route("/formations/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
