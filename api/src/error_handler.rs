//! Application error type and its HTTP mapping.
//!
//! Every failure leaves the service as a plain-text body with a status from
//! the pipeline's taxonomy: 400 for anything wrong with the request itself,
//! 500 for configuration, content-load, and upstream-model failures. Bodies
//! carry the category message only — no internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use course_context::ContextError;
use llm_service::LlmServiceError;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("{0}")]
    BadRequest(String),

    // --- Pipeline ---
    /// The configured model provider has no usable credential.
    #[error("Missing model provider API key")]
    MissingCredential,

    /// Grounding material could not be loaded; Display text is user-facing.
    #[error("{0}")]
    ContentLoad(#[from] ContextError),

    /// The model call failed at the transport level or upstream.
    #[error("Model call failed")]
    Upstream(#[source] LlmServiceError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 5xx — startup-only
            AppError::MissingEnv(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 5xx — per-request
            AppError::MissingCredential | AppError::ContentLoad(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Upstream(ref err) = self {
            tracing::error!(%err, "model call failed");
        }
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert Axum body rejections to `AppError`, preserving the service's
/// historical wording: structurally valid JSON that lacks a field reads
/// differently from JSON that does not parse at all.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;
        match err {
            JsonRejection::JsonDataError(_) => {
                AppError::BadRequest("Missing mode or question".into())
            }
            _ => AppError::BadRequest("Invalid JSON".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingCredential.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ContentLoad(ContextError::Empty {
                label: "syllabus file"
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn content_load_body_is_user_facing_text() {
        let err = AppError::ContentLoad(ContextError::Empty {
            label: "midterm materials",
        });
        assert_eq!(
            err.to_string(),
            "No materials available for this section yet."
        );
    }
}
