//! Router assembly: every route lives under `/api`.

mod common;
mod formation;

pub use common::common_routes;
pub use formation::formation_routes;

use crate::state::AppState;
use axum::http::Method;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub const BASE_PATH: &str = "/api";

/// JSON request bodies larger than this are rejected.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Request origin and headers are reflected back, so any browser origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(formation_routes(state));
    Router::new()
        .nest(BASE_PATH, api)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}
