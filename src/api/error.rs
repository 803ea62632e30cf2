use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::downloader::DownloadError;

pub const MISSING_URL: &str = "Missing 'url' parameter in the request body.";
pub const INVALID_URL: &str = "Invalid YouTube URL.";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a 400 error with the provided message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Creates a 500 error with the provided message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn missing_url() -> Self {
        Self::bad_request(MISSING_URL)
    }

    pub fn invalid_url() -> Self {
        Self::bad_request(INVALID_URL)
    }
}

/// Every adapter failure is a 500 carrying the adapter's message.
impl From<DownloadError> for ApiError {
    fn from(e: DownloadError) -> Self {
        Self::internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
