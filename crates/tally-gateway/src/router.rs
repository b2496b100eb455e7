//! Axum router wiring.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, http, ops};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().gateway.max_body_bytes;

    Router::new()
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/counters", post(http::add_counter))
        .route(
            "/counters/:id",
            get(http::get_counter).delete(http::delete_counter),
        )
        .route("/counters/:id/inc", get(http::inc_counter))
        .fallback(http::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            http::track_server_errors,
        ))
        .with_state(state)
}
