// CLI engine - uses the native `yt-dlp` binary

use async_trait::async_trait;
use std::time::Duration;

use super::command;
use super::traits::{EngineRequest, ExtractionEngine};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::RawVideoInfo;
use crate::downloader::tools::find_ytdlp;

pub struct CliEngine {
    ytdlp_path: String,
    timeout: Option<Duration>,
}

impl CliEngine {
    /// Locate the binary the way `ToolManager` does
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_path(find_ytdlp(), timeout)
    }

    pub fn with_path(ytdlp_path: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            ytdlp_path: ytdlp_path.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ExtractionEngine for CliEngine {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    async fn extract_info(&self, request: &EngineRequest) -> Result<RawVideoInfo, DownloadError> {
        command::extract_info(self.name(), &self.ytdlp_path, &[], request, self.timeout).await
    }

    async fn download(&self, request: &EngineRequest) -> Result<(), DownloadError> {
        command::download(self.name(), &self.ytdlp_path, &[], request, self.timeout).await
    }
}
