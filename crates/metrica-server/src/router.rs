//! Axum router wiring.
//!
//! Exposes the path-encoded update routes; a trailing slash with no value
//! still reaches the handler (400). Everything else falls through to a bare
//! 404.

use axum::{routing::post, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/update/:kind/:name/:value", post(handlers::update_metric))
        .route("/update/:kind/:name", post(handlers::update_metric))
        .route("/update/:kind/:name/", post(handlers::update_metric))
        .fallback(handlers::not_found)
        .with_state(state)
}
