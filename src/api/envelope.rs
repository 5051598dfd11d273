//! Uniform response envelope.
//!
//! Every action-routed response is a JSON object with at least
//! `{"success": bool}`; failures carry a human-readable `message`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::services::ServiceError;

/// Fixed message for every store-unavailable response.
pub const STORE_UNAVAILABLE: &str = "Data store unavailable";

pub fn ok_data(data: Value) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": data })),
    )
        .into_response()
}

pub fn ok_list<T: Serialize>(items: &[T]) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": items, "count": items.len() })),
    )
        .into_response()
}

pub fn ok_message(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": message })),
    )
        .into_response()
}

pub fn fail(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Unavailable => fail(StatusCode::SERVICE_UNAVAILABLE, STORE_UNAVAILABLE),
            ServiceError::Validation(msg) => fail(StatusCode::BAD_REQUEST, &msg),
            ServiceError::Conflict(msg) => fail(StatusCode::BAD_REQUEST, &msg),
            ServiceError::NotFound => fail(StatusCode::NOT_FOUND, "Resource not found"),
            ServiceError::Database(detail) => {
                // Detail stays server-side; the client gets a generic message
                tracing::error!("store failure: {}", detail);
                fail(StatusCode::INTERNAL_SERVER_ERROR, "Internal data store error")
            }
        }
    }
}
