use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::downloader::{is_valid_youtube_url, ResolutionSet, VideoMetadata};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness probe; performs no checks.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Pull a validated watch URL out of a JSON request body.
///
/// Anything that is not an object with a non-empty string `url` counts as a
/// missing parameter, including bodies that are not JSON at all.
fn require_url(body: &[u8]) -> ApiResult<String> {
    let url = serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("url"))
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .ok_or_else(ApiError::missing_url)?;

    if !is_valid_youtube_url(&url) {
        debug!(url = %url, "Rejected URL");
        return Err(ApiError::invalid_url());
    }
    Ok(url)
}

pub async fn download_by_resolution(
    State(state): State<AppState>,
    Path(resolution): Path<String>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let url = require_url(&body)?;

    state.downloader.download(&url, &resolution).await?;

    Ok(Json(MessageResponse {
        message: format!(
            "Video with resolution {} downloaded successfully.",
            resolution
        ),
    }))
}

pub async fn video_info(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<VideoMetadata>> {
    let url = require_url(&body)?;
    let metadata = state.downloader.fetch_metadata(&url).await?;
    Ok(Json(metadata))
}

pub async fn available_resolutions(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ResolutionSet>> {
    let url = require_url(&body)?;
    let resolutions = state.downloader.fetch_resolutions(&url).await?;
    Ok(Json(resolutions))
}
