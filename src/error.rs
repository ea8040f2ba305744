use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors talking to the remote signs backend.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("signs API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("signs API returned {0}")]
    Status(reqwest::StatusCode),
}

/// Errors raised inside the admin handlers themselves. Backend failures
/// never land here; they are surfaced in-page or as flash messages.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Session error: {0}")]
    SessionError(String),
    #[error("Template error")]
    TemplateError(#[from] tera::Error),
}

impl From<tower_sessions::session::Error> for AdminError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AdminError::SessionError(err.to_string())
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AdminError::SessionError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Session error: {}", e),
            ),
            AdminError::TemplateError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            ),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
