// Downloader module - validation, format selection and the engine adapter

pub mod errors;
pub mod extractors;
pub mod format_selector;
pub mod models;
pub mod orchestrator;
pub mod tools;
pub mod utils;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::DownloadError;
pub use models::{ResolutionSet, VideoMetadata};
pub use orchestrator::Downloader;
pub use validator::is_valid_youtube_url;
