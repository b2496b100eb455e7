//! Counts 5xx responses by method, uri and status.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_server_errors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();

    let resp = next.run(req).await;

    let status = resp.status();
    if status.is_server_error() {
        state.metrics().internal_server_errors.inc(&[
            ("method", &method),
            ("uri", &uri),
            ("status_code", status.as_str()),
        ]);
    }
    resp
}
