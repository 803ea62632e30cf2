// ExtractionEngine trait and the per-call request it consumes

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

use crate::downloader::errors::DownloadError;
use crate::downloader::models::RawVideoInfo;

/// How the yt-dlp engine is launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Python module yt_dlp (`python3 -m yt_dlp`)
    Python,
    /// Native yt-dlp binary
    Cli,
    /// Python when the module imports, otherwise the binary
    #[default]
    Auto,
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Everything the engine needs for one call.
///
/// Built fresh by the adapter for each request; engines only translate it
/// into their own invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineRequest {
    pub url: String,
    /// yt-dlp format spec (downloads only)
    pub format: Option<String>,
    /// Output path template (downloads only)
    pub output_template: Option<PathBuf>,
    /// Player clients, tried in order by the engine
    pub player_clients: Vec<String>,
    /// Extractor steps to skip (e.g. `translated_subs`)
    pub skip: Vec<String>,
    /// Extra HTTP headers as (name, value)
    pub headers: Vec<(String, String)>,
    /// Netscape cookie file, only set when it exists on disk
    pub cookies_path: Option<PathBuf>,
    /// Suppress engine progress and warnings
    pub quiet: bool,
}

impl EngineRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// `youtube:` extractor arguments, or `None` when nothing is set
    pub fn extractor_args(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.player_clients.is_empty() {
            parts.push(format!("player_client={}", self.player_clients.join(",")));
        }
        if !self.skip.is_empty() {
            parts.push(format!("skip={}", self.skip.join(",")));
        }
        if parts.is_empty() {
            None
        } else {
            Some(format!("youtube:{}", parts.join(";")))
        }
    }
}

/// Trait for extraction engine implementations
#[async_trait]
pub trait ExtractionEngine: Send + Sync {
    /// Name of the engine (for logging)
    fn name(&self) -> &'static str;

    /// Resolve the URL into its info JSON without downloading
    async fn extract_info(&self, request: &EngineRequest) -> Result<RawVideoInfo, DownloadError>;

    /// Download the URL according to the request's format and template
    async fn download(&self, request: &EngineRequest) -> Result<(), DownloadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractor_args_join_clients_and_skips() {
        let mut request = EngineRequest::new("https://youtube.com/watch?v=abc");
        assert_eq!(request.extractor_args(), None);

        request.player_clients = vec!["ios".into(), "mweb".into(), "android".into()];
        assert_eq!(
            request.extractor_args().as_deref(),
            Some("youtube:player_client=ios,mweb,android")
        );

        request.skip = vec!["translated_subs".into()];
        assert_eq!(
            request.extractor_args().as_deref(),
            Some("youtube:player_client=ios,mweb,android;skip=translated_subs")
        );
    }
}
