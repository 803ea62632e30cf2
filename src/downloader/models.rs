// Common data models for the downloader

use serde::{Deserialize, Serialize};

/// Video metadata returned by `/video_info`
///
/// Every field mirrors an optional key of the engine's info JSON, so any of
/// them may serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Duration in seconds
    pub length: Option<u64>,
    pub views: Option<u64>,
    pub description: Option<String>,
    /// Upload date as reported by the engine (`YYYYMMDD`)
    pub publish_date: Option<String>,
}

/// Resolutions available for a video, ascending by height
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSet {
    /// Formats carrying both video and audio
    pub progressive: Vec<String>,
    /// Every format carrying video
    pub all: Vec<String>,
}

/// Single format entry from the engine's `formats` array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoFormat {
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub height: Option<u64>,
    /// Video codec (avc1, vp9, av01, none)
    #[serde(default)]
    pub vcodec: Option<String>,
    /// Audio codec (mp4a, opus, none)
    #[serde(default)]
    pub acodec: Option<String>,
}

impl VideoFormat {
    /// Whether the format carries video. A missing codec is unknown, not absent.
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }

    /// Whether the format carries audio. A missing codec is unknown, not absent.
    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    /// Whether the format is a single video+audio stream
    pub fn is_progressive(&self) -> bool {
        self.has_video() && self.has_audio()
    }
}

/// Subset of the engine's `--dump-json` output this service reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVideoInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub formats: Vec<VideoFormat>,
}

impl From<RawVideoInfo> for VideoMetadata {
    fn from(info: RawVideoInfo) -> Self {
        Self {
            title: info.title,
            author: info.uploader,
            length: info.duration,
            views: info.view_count,
            description: info.description,
            publish_date: info.upload_date,
        }
    }
}

/// Accepts integers, floats (yt-dlp reports `duration` as `212.0` for some
/// extractors) and `null`. Anything else becomes `None`.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64()
            .or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
    }))
}
