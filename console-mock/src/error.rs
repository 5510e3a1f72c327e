//! Mock API errors
//!
//! Every fault is answered the way the real service answers: an HTTP status
//! and a `{ "message": ... }` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Injected fault")]
    Injected,
}

impl MockError {
    fn status(&self) -> StatusCode {
        match self {
            MockError::NotFound(_) => StatusCode::NOT_FOUND,
            MockError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MockError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            MockError::Injected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}

pub type MockResult<T> = Result<T, MockError>;
