// HTTP surface: health probe plus the three engine-backed endpoints

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::downloader::Downloader;

/// Router state. The downloader holds only immutable configuration, so
/// requests share nothing mutable in memory.
#[derive(Clone)]
pub struct AppState {
    pub downloader: Arc<Downloader>,
}

impl AppState {
    pub fn new(downloader: Arc<Downloader>) -> Self {
        Self { downloader }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/download/{resolution}",
            post(handlers::download_by_resolution),
        )
        .route("/video_info", post(handlers::video_info))
        .route("/available_resolutions", post(handlers::available_resolutions))
        .with_state(state)
}
