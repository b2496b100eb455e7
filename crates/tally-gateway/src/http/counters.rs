use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use tally_core::error::TallyError;

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
struct AddCounterRequest {
    id: String,
}

fn bad_request(err: TallyError) -> Response {
    let body = json!({ "error": err.to_string(), "code": err.client_code().as_str() });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn internal(uri: &OriginalUri, id: &str, err: &TallyError) -> Response {
    tracing::error!(uri = %uri.0, %id, error = %err, "internal server error");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// `POST /counters` with `{"id": "..."}`.
pub async fn add_counter(
    State(state): State<AppState>,
    uri: OriginalUri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();

    // Oversized or unreadable bodies are malformed requests like bad JSON.
    let body = match body {
        Ok(b) => b,
        Err(e) => return bad_request(TallyError::BadRequest(format!("unreadable body: {e}"))),
    };
    let req: AddCounterRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => return bad_request(TallyError::BadRequest(format!("invalid body: {e}"))),
    };
    if req.id.is_empty() {
        return bad_request(TallyError::BadRequest("id must not be empty".into()));
    }

    match state.manager().add(&req.id) {
        Ok(()) => {
            let metrics = state.metrics();
            metrics.add_counter_duration_micros.observe(&[], start.elapsed());
            metrics.counters_number.inc(&[]);
            StatusCode::CREATED.into_response()
        }
        Err(e @ TallyError::AlreadyExists(_)) => bad_request(e),
        Err(e) => internal(&uri, &req.id, &e),
    }
}

/// `GET /counters/:id`.
pub async fn get_counter(
    State(state): State<AppState>,
    uri: OriginalUri,
    Path(id): Path<String>,
) -> Response {
    match state.manager().get(&id) {
        Ok(counter) => (StatusCode::OK, Json(counter)).into_response(),
        Err(TallyError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal(&uri, &id, &e),
    }
}

/// `GET /counters/:id/inc`. Every call increments.
pub async fn inc_counter(
    State(state): State<AppState>,
    uri: OriginalUri,
    Path(id): Path<String>,
) -> Response {
    match state.manager().inc(&id) {
        Ok(_) => {
            state.metrics().inc_counter.inc(&[]);
            StatusCode::OK.into_response()
        }
        Err(TallyError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal(&uri, &id, &e),
    }
}

/// `DELETE /counters/:id`.
pub async fn delete_counter(
    State(state): State<AppState>,
    uri: OriginalUri,
    Path(id): Path<String>,
) -> Response {
    match state.manager().delete(&id) {
        Ok(()) => {
            state.metrics().counters_number.dec(&[]);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(TallyError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal(&uri, &id, &e),
    }
}

/// Unknown routes.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
