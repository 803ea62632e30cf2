// Downloader - the adapter between HTTP handlers and the extraction engine
//
// Each call builds a fresh EngineRequest: format selector, output template,
// player clients, spoofed headers and the optional cookie file. Nothing is
// cached between calls; the filesystem is the only shared resource.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::errors::DownloadError;
use super::extractors::{diagnose_error, EngineRequest, ExtractionEngine};
use super::format_selector::FormatSelector;
use super::models::{ResolutionSet, VideoMetadata};
use super::validator::extract_video_id;
use crate::config::StorageConfig;

/// Player clients for download and metadata, tried in order by the engine
pub const PLAYER_CLIENTS: [&str; 3] = ["ios", "mweb", "android"];
/// Player client used to enumerate resolutions
pub const RESOLUTION_PLAYER_CLIENT: &str = "ios";
pub const SKIPPED_STEPS: [&str; 1] = ["translated_subs"];

/// iOS YouTube app identity
pub const IOS_USER_AGENT: &str =
    "com.google.ios.youtube/19.29.1 (iPhone16,2; U; CPU iOS 17_5_1 like Mac OS X;)";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-us,en;q=0.5";

/// File name template inside the per-video directory
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

pub struct Downloader {
    engine: Arc<dyn ExtractionEngine>,
    storage: StorageConfig,
}

impl Downloader {
    pub fn new(engine: Arc<dyn ExtractionEngine>, storage: StorageConfig) -> Self {
        Self { engine, storage }
    }

    /// Download `url` as the best progressive mp4 at or below `resolution`.
    pub async fn download(&self, url: &str, resolution: &str) -> Result<(), DownloadError> {
        info!(url, resolution, "Downloading video");

        let request = self.download_request(url, resolution)?;
        // Concurrent downloads of one video share this directory; creation is idempotent.
        if let Some(dir) = request.output_template.as_ref().and_then(|t| t.parent()) {
            tokio::fs::create_dir_all(dir).await?;
        }

        match self.engine.download(&request).await {
            Ok(()) => {
                info!(url, resolution, engine = self.engine.name(), "Download finished");
                Ok(())
            }
            Err(e) => Err(self.log_failure("download", url, e)),
        }
    }

    /// Title, author, length, views, description and publish date of `url`.
    pub async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, DownloadError> {
        info!(url, "Fetching video info");

        let request = self.metadata_request(url);
        match self.engine.extract_info(&request).await {
            Ok(info) => Ok(VideoMetadata::from(info)),
            Err(e) => Err(self.log_failure("video_info", url, e)),
        }
    }

    /// Progressive and all-video resolutions of `url`, ascending by height.
    pub async fn fetch_resolutions(&self, url: &str) -> Result<ResolutionSet, DownloadError> {
        info!(url, "Fetching available resolutions");

        let request = self.resolutions_request(url);
        match self.engine.extract_info(&request).await {
            Ok(info) => Ok(FormatSelector::build_resolution_set(&info.formats)),
            Err(e) => Err(self.log_failure("available_resolutions", url, e)),
        }
    }

    pub(crate) fn download_request(
        &self,
        url: &str,
        resolution: &str,
    ) -> Result<EngineRequest, DownloadError> {
        let height = FormatSelector::parse_height(resolution)?;
        let video_id = extract_video_id(url)
            .ok_or_else(|| DownloadError::InvalidUrl(url.to_string()))?;

        let mut request = EngineRequest::new(url);
        request.format = Some(FormatSelector::progressive_spec(height));
        request.output_template = Some(self.video_dir(video_id).join(OUTPUT_TEMPLATE));
        request.player_clients = PLAYER_CLIENTS.iter().map(|c| c.to_string()).collect();
        request.skip = SKIPPED_STEPS.iter().map(|s| s.to_string()).collect();
        request.headers = vec![
            ("User-Agent".to_string(), IOS_USER_AGENT.to_string()),
            ("Accept".to_string(), ACCEPT.to_string()),
            ("Accept-Language".to_string(), ACCEPT_LANGUAGE.to_string()),
        ];
        request.cookies_path = self.cookies();
        Ok(request)
    }

    pub(crate) fn metadata_request(&self, url: &str) -> EngineRequest {
        let mut request = EngineRequest::new(url);
        request.quiet = true;
        request.player_clients = PLAYER_CLIENTS.iter().map(|c| c.to_string()).collect();
        request.skip = SKIPPED_STEPS.iter().map(|s| s.to_string()).collect();
        request.headers = vec![("User-Agent".to_string(), IOS_USER_AGENT.to_string())];
        request.cookies_path = self.cookies();
        request
    }

    pub(crate) fn resolutions_request(&self, url: &str) -> EngineRequest {
        let mut request = EngineRequest::new(url);
        request.quiet = true;
        request.player_clients = vec![RESOLUTION_PLAYER_CLIENT.to_string()];
        request.cookies_path = self.cookies();
        request
    }

    fn video_dir(&self, video_id: &str) -> PathBuf {
        self.storage.downloads_root.join(video_id)
    }

    /// Cookie file path, checked on every call so it can appear or vanish at runtime
    fn cookies(&self) -> Option<PathBuf> {
        let path = &self.storage.cookies_path;
        path.is_file().then(|| path.clone())
    }

    fn log_failure(&self, operation: &str, url: &str, error: DownloadError) -> DownloadError {
        let message = error.to_string();
        match diagnose_error(&message) {
            Some(reason) if reason.cookies_might_help() && self.cookies().is_none() => warn!(
                operation,
                url,
                reason = %reason,
                cookies = false,
                "Engine call failed: {}",
                message
            ),
            Some(reason) => warn!(
                operation,
                url,
                reason = %reason,
                permanent = reason.is_permanent(),
                "Engine call failed: {}",
                message
            ),
            None => warn!(operation, url, "Engine call failed: {}", message),
        }
        error
    }
}
