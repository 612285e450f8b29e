//! Server error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors surfaced to HTTP clients.
///
/// Resolution misses are not errors (the router reports them as
/// placeholders); only structurally invalid requests end up here.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// The requested language section does not exist.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownLanguage(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
