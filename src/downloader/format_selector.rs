// FormatSelector - resolution labels and format selection
//
// Handles:
// - Parsing "720p"-style labels into a height
// - The yt-dlp format spec for progressive downloads
// - Partitioning engine formats into progressive / all-video resolutions

use std::collections::BTreeSet;

use super::errors::DownloadError;
use super::models::{ResolutionSet, VideoFormat};

/// Container requested for progressive downloads
pub const DOWNLOAD_CONTAINER: &str = "mp4";

pub struct FormatSelector;

impl FormatSelector {
    /// Parse a resolution label such as `720p` into its height.
    pub fn parse_height(resolution: &str) -> Result<u32, DownloadError> {
        resolution
            .strip_suffix('p')
            .and_then(|h| h.parse::<u32>().ok())
            .filter(|h| *h > 0)
            .ok_or_else(|| DownloadError::InvalidResolution(resolution.to_string()))
    }

    /// Format spec for the best progressive stream at or below `height`
    pub fn progressive_spec(height: u32) -> String {
        format!("best[height<={}][ext={}]", height, DOWNLOAD_CONTAINER)
    }

    /// Build the progressive and all-video resolution lists.
    ///
    /// Heights are deduplicated and ordered numerically; formats without a
    /// height are ignored.
    pub fn build_resolution_set(formats: &[VideoFormat]) -> ResolutionSet {
        let mut progressive = BTreeSet::new();
        let mut all = BTreeSet::new();

        for format in formats {
            let Some(height) = format.height.filter(|h| *h > 0) else {
                continue;
            };
            if !format.has_video() {
                continue;
            }
            all.insert(height);
            if format.has_audio() {
                progressive.insert(height);
            }
        }

        ResolutionSet {
            progressive: progressive.into_iter().map(Self::label).collect(),
            all: all.into_iter().map(Self::label).collect(),
        }
    }

    fn label(height: u64) -> String {
        format!("{}p", height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_format(height: Option<u64>, vcodec: &str, acodec: &str) -> VideoFormat {
        VideoFormat {
            format_id: height.map(|h| format!("{}p", h)),
            ext: Some("mp4".to_string()),
            height,
            vcodec: Some(vcodec.to_string()),
            acodec: Some(acodec.to_string()),
        }
    }

    #[test]
    fn test_progressive_sorted_and_deduplicated() {
        let formats = vec![
            make_format(Some(720), "avc1", "mp4a"),
            make_format(Some(480), "avc1", "mp4a"),
            make_format(Some(720), "vp9", "opus"),
            make_format(Some(1080), "avc1", "mp4a"),
        ];

        let set = FormatSelector::build_resolution_set(&formats);

        assert_eq!(set.progressive, vec!["480p", "720p", "1080p"]);
        assert_eq!(set.all, vec!["480p", "720p", "1080p"]);
    }

    #[test]
    fn test_numeric_not_lexicographic_order() {
        let formats = vec![
            make_format(Some(1440), "vp9", "none"),
            make_format(Some(144), "avc1", "mp4a"),
            make_format(Some(2160), "av01", "none"),
            make_format(Some(360), "avc1", "mp4a"),
        ];

        let set = FormatSelector::build_resolution_set(&formats);

        assert_eq!(set.progressive, vec!["144p", "360p"]);
        assert_eq!(set.all, vec!["144p", "360p", "1440p", "2160p"]);
    }

    #[test]
    fn test_audio_only_and_heightless_formats_skipped() {
        let formats = vec![
            make_format(None, "none", "opus"),
            make_format(Some(0), "avc1", "mp4a"),
            make_format(None, "avc1", "mp4a"),
            make_format(Some(240), "avc1", "none"),
        ];

        let set = FormatSelector::build_resolution_set(&formats);

        assert!(set.progressive.is_empty());
        assert_eq!(set.all, vec!["240p"]);
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(FormatSelector::parse_height("720p"), Ok(720));
        assert_eq!(FormatSelector::parse_height("1080p"), Ok(1080));
        assert!(FormatSelector::parse_height("720").is_err());
        assert!(FormatSelector::parse_height("hd").is_err());
        assert!(FormatSelector::parse_height("0p").is_err());
        assert!(FormatSelector::parse_height("").is_err());
    }

    #[test]
    fn test_progressive_spec() {
        assert_eq!(
            FormatSelector::progressive_spec(720),
            "best[height<=720][ext=mp4]"
        );
    }
}
