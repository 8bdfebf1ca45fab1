use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use medically_domain::ServiceError;

/// Error returned by every handler.
///
/// The response body is the error message as plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by a domain service
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The request body could not be decoded
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::InvalidInput(_)) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(
                ServiceError::ConstraintViolation(_) | ServiceError::Unavailable(_) | ServiceError::Internal(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "Request failed: {}", message);
        } else {
            warn!(status = status.as_u16(), "Request rejected: {}", message);
        }

        (status, message).into_response()
    }
}
