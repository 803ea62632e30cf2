// Python engine - uses `python3 -m yt_dlp`
//
// Same arguments as the CLI engine; useful where yt-dlp is installed with
// pip into an interpreter rather than as a standalone binary.

use async_trait::async_trait;
use std::time::Duration;

use super::command;
use super::traits::{EngineRequest, ExtractionEngine};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::RawVideoInfo;

pub struct PythonEngine {
    python_cmd: String,
    prefix: Vec<String>,
    timeout: Option<Duration>,
}

impl PythonEngine {
    pub fn new(python_cmd: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            python_cmd: python_cmd.into(),
            prefix: vec!["-m".to_string(), "yt_dlp".to_string()],
            timeout,
        }
    }
}

#[async_trait]
impl ExtractionEngine for PythonEngine {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
    }

    async fn extract_info(&self, request: &EngineRequest) -> Result<RawVideoInfo, DownloadError> {
        command::extract_info(
            self.name(),
            &self.python_cmd,
            &self.prefix,
            request,
            self.timeout,
        )
        .await
    }

    async fn download(&self, request: &EngineRequest) -> Result<(), DownloadError> {
        command::download(
            self.name(),
            &self.python_cmd,
            &self.prefix,
            request,
            self.timeout,
        )
        .await
    }
}
