use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error taxonomy.
///
/// Each variant carries the exact message string clients receive; the HTTP
/// status is derived from the variant in [`IntoResponse`]. Message texts are
/// part of the wire contract and must stay stable.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL format.")]
    InvalidUrl,
    #[error("Validity must be a positive number of minutes.")]
    InvalidValidity,
    #[error("Shortcode already in use.")]
    CodeConflict,
    #[error("Shortcode not found.")]
    NotFound,
    #[error("Shortlink has expired.")]
    Expired,
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidValidity | AppError::CodeConflict => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(message) = &self {
            tracing::error!("Internal error: {message}");
        }

        let body = json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Maps body validation failures onto the error taxonomy.
///
/// The `validity` field is the only numeric one; everything else reduces to
/// a URL problem.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        if errors.field_errors().contains_key("validity") {
            AppError::InvalidValidity
        } else {
            AppError::InvalidUrl
        }
    }
}
