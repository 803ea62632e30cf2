// Error types for the extraction adapter

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// The engine ran and reported a failure; holds its raw error text
    Engine(String),

    /// Engine process could not be started, awaited, or timed out
    ExecutionError(String),

    /// Failed to parse yt-dlp JSON output
    ParseError(String),

    /// URL carries no video id
    InvalidUrl(String),

    /// Resolution label is not of the form `<height>p`
    InvalidResolution(String),

    /// Local filesystem failure (output directory creation)
    Io(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Passed through untouched: clients see exactly what the engine said.
            Self::Engine(msg) => f.write_str(msg),
            Self::ExecutionError(msg) => write!(f, "Execution error: {}", msg),
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            Self::InvalidResolution(res) => write!(
                f,
                "Invalid resolution '{}': expected a height such as 720p",
                res
            ),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<std::io::Error> for DownloadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DownloadError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParseError(format!("Invalid JSON: {}", e))
    }
}
