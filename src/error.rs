use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the JSON API. The body of each variant is a stable
/// `{"error": ...}` object; server errors never leak their cause.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad admin key")]
    Unauthorized,

    #[error("{0}")]
    InvalidRequest(&'static str),

    #[error("database error: {0}")]
    Server(#[from] sqlx::Error),

    #[error("template error: {0}")]
    Render(#[from] tera::Error),
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Bad admin key",
            ApiError::InvalidRequest(msg) => *msg,
            ApiError::Server(_) | ApiError::Render(_) => "server_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Server(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.public_message()
        }))
    }
}
