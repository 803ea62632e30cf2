// Watch-URL validation

use regex::Regex;

lazy_static::lazy_static! {
    static ref WATCH_URL_RE: Regex =
        Regex::new(r"^(https?://)?(www\.)?youtube\.com/watch\?v=[\w-]+(&\S*)?$").unwrap();
}

/// Check that `url` is a canonical `youtube.com/watch?v=<id>` link.
///
/// Scheme and `www.` are optional; anything after the id must start with `&`.
pub fn is_valid_youtube_url(url: &str) -> bool {
    WATCH_URL_RE.is_match(url)
}

/// Video id from the `v` query parameter, up to the next `&`.
///
/// Returns `None` when there is no `v=` or the id is empty.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("v=")?;
    let id = rest.split('&').next().unwrap_or(rest);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
