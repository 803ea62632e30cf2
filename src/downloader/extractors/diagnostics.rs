// Failure diagnostics - classifies engine error text for logging
//
// The classification never changes what the client receives; the raw
// engine message is returned as-is. It only enriches the log line so an
// operator can tell a geo block from a removed video at a glance.

use std::fmt;

/// Why the platform refused or failed a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingReason {
    /// HTTP 403 Forbidden - general access denied
    Http403Forbidden,

    /// SABR streaming protection hiding formats from the client
    SabrStreaming,

    /// Proof of Origin token required
    PoTokenRequired,

    /// Age-restricted content requiring login
    AgeRestricted,

    GeoBlocked,

    /// Network timeout (soft IP block)
    NetworkTimeout,

    /// 429 or similar
    RateLimited,

    BotDetection,

    PrivateVideo,

    /// Deleted or otherwise unavailable
    VideoUnavailable,

    /// DRM, Premium, paid content
    DrmProtected,

    MembersOnly,

    /// Extractor broke against a platform change
    ExtractorBroken,

    Unknown,
}

impl BlockingReason {
    /// Check if a cookie file might get past this
    pub fn cookies_might_help(&self) -> bool {
        matches!(
            self,
            Self::Http403Forbidden
                | Self::SabrStreaming
                | Self::PoTokenRequired
                | Self::AgeRestricted
                | Self::BotDetection
                | Self::PrivateVideo
                | Self::MembersOnly
        )
    }

    /// Check if this is a permanent restriction (no workaround)
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::DrmProtected | Self::VideoUnavailable)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Http403Forbidden => "Access denied (HTTP 403)",
            Self::SabrStreaming => "SABR streaming protection active",
            Self::PoTokenRequired => "Proof of Origin token required",
            Self::AgeRestricted => "Age-restricted content",
            Self::GeoBlocked => "Geographic restriction",
            Self::NetworkTimeout => "Network timeout (possible IP throttling)",
            Self::RateLimited => "Rate limited by YouTube",
            Self::BotDetection => "Bot detection triggered",
            Self::PrivateVideo => "Private video",
            Self::VideoUnavailable => "Video unavailable",
            Self::DrmProtected => "DRM-protected content",
            Self::MembersOnly => "Members-only content",
            Self::ExtractorBroken => "Extractor incompatible with the platform",
            Self::Unknown => "Unknown failure",
        }
    }
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify an engine error message. Returns `None` for empty input.
pub fn diagnose_error(error: &str) -> Option<BlockingReason> {
    if error.trim().is_empty() {
        return None;
    }
    let lower = error.to_lowercase();

    // Ordered from most to least specific.
    let reason = if contains_any(
        &lower,
        &[
            "drm",
            "widevine",
            "playready",
            "fairplay",
            "youtube premium",
            "requires purchase",
            "requires payment",
            "rental",
        ],
    ) {
        BlockingReason::DrmProtected
    } else if contains_any(
        &lower,
        &["members only", "members-only", "join this channel", "available to members"],
    ) {
        BlockingReason::MembersOnly
    } else if lower.contains("sabr") {
        BlockingReason::SabrStreaming
    } else if contains_any(&lower, &["po token", "proof of origin"]) {
        BlockingReason::PoTokenRequired
    } else if contains_any(&lower, &["age-restricted", "confirm your age", "inappropriate for some users"]) {
        BlockingReason::AgeRestricted
    } else if contains_any(
        &lower,
        &["available in your country", "blocked in your country", "geo restrict"],
    ) {
        BlockingReason::GeoBlocked
    } else if contains_any(&lower, &["private video", "video is private"]) {
        BlockingReason::PrivateVideo
    } else if contains_any(
        &lower,
        &[
            "video unavailable",
            "video has been removed",
            "no longer available",
            "video is unavailable",
        ],
    ) {
        BlockingReason::VideoUnavailable
    } else if contains_any(&lower, &["429", "rate limit", "too many requests"]) {
        BlockingReason::RateLimited
    } else if contains_any(&lower, &["not a bot", "captcha", "unusual traffic"]) {
        BlockingReason::BotDetection
    } else if contains_any(&lower, &["403", "forbidden"]) {
        BlockingReason::Http403Forbidden
    } else if contains_any(&lower, &["timed out", "timeout", "network is unreachable", "connection refused"]) {
        BlockingReason::NetworkTimeout
    } else if contains_any(&lower, &["unable to extract", "please report this issue", "nsig extraction failed"]) {
        BlockingReason::ExtractorBroken
    } else {
        BlockingReason::Unknown
    };

    Some(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_403_detection() {
        let error = "ERROR: unable to download video data: HTTP Error 403: Forbidden";
        assert_eq!(diagnose_error(error), Some(BlockingReason::Http403Forbidden));
    }

    #[test]
    fn test_sabr_detection() {
        let error = "YouTube is forcing SABR streaming for this client";
        assert_eq!(diagnose_error(error), Some(BlockingReason::SabrStreaming));
    }

    #[test]
    fn test_po_token_detection() {
        let error = "mweb client https formats require a GVS PO Token";
        assert_eq!(diagnose_error(error), Some(BlockingReason::PoTokenRequired));
    }

    #[test]
    fn test_age_restricted_detection() {
        let error = "ERROR: [youtube] abc: Sign in to confirm your age";
        assert_eq!(diagnose_error(error), Some(BlockingReason::AgeRestricted));
    }

    #[test]
    fn test_bot_detection() {
        let error = "ERROR: [youtube] abc: Sign in to confirm you're not a bot";
        assert_eq!(diagnose_error(error), Some(BlockingReason::BotDetection));
    }

    #[test]
    fn test_geo_detection() {
        let error = "ERROR: [youtube] abc: Video unavailable. The uploader has not made this video available in your country";
        assert_eq!(diagnose_error(error), Some(BlockingReason::GeoBlocked));
    }

    #[test]
    fn test_unavailable_detection() {
        let error = "ERROR: [youtube] abc123: Video unavailable";
        let reason = diagnose_error(error);
        assert_eq!(reason, Some(BlockingReason::VideoUnavailable));
        assert!(reason.unwrap().is_permanent());
    }

    #[test]
    fn test_timeout_detection() {
        let error = "Timed out after 30s";
        assert_eq!(diagnose_error(error), Some(BlockingReason::NetworkTimeout));
    }

    #[test]
    fn test_extractor_breakage_detection() {
        let error = "ERROR: [youtube] abc: Unable to extract initial player response; please report this issue";
        assert_eq!(diagnose_error(error), Some(BlockingReason::ExtractorBroken));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(diagnose_error("something odd"), Some(BlockingReason::Unknown));
        assert_eq!(diagnose_error("   "), None);
    }

    #[test]
    fn test_cookie_hint() {
        assert!(BlockingReason::AgeRestricted.cookies_might_help());
        assert!(!BlockingReason::GeoBlocked.cookies_might_help());
    }
}
