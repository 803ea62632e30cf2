// Fake extraction engine shared by unit tests

use async_trait::async_trait;
use std::sync::Mutex;

use super::errors::DownloadError;
use super::extractors::{EngineRequest, ExtractionEngine};
use super::models::RawVideoInfo;

/// Records every request and answers from canned results
pub struct FakeEngine {
    info: Result<RawVideoInfo, DownloadError>,
    download: Result<(), DownloadError>,
    seen: Mutex<Vec<EngineRequest>>,
}

impl FakeEngine {
    pub fn ok(info: RawVideoInfo) -> Self {
        Self {
            info: Ok(info),
            download: Ok(()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            info: Err(DownloadError::Engine(message.to_string())),
            download: Err(DownloadError::Engine(message.to_string())),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last(&self) -> EngineRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ExtractionEngine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn extract_info(&self, request: &EngineRequest) -> Result<RawVideoInfo, DownloadError> {
        self.seen.lock().unwrap().push(request.clone());
        self.info.clone()
    }

    async fn download(&self, request: &EngineRequest) -> Result<(), DownloadError> {
        self.seen.lock().unwrap().push(request.clone());
        self.download.clone()
    }
}
