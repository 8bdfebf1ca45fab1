use axum::extract::FromRequest;

use super::errors::ApiError;

/// JSON body extractor whose rejections become [`ApiError::BadRequest`].
///
/// Syntax errors, type mismatches and a missing `Content-Type` all map to 400.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
