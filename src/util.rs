//! Small string utilities shared by the API layer.
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted URL shapes: watch links, short links, shorts and embeds.
/// The id itself is always eleven characters of `[A-Za-z0-9_-]`.
static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:youtube\.com|youtube-nocookie\.com)/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})",
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"(?:youtube\.com|youtube-nocookie\.com)/shorts/([A-Za-z0-9_-]{11})",
        r"(?:youtube\.com|youtube-nocookie\.com)/embed/([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("video id pattern compiles"))
    .collect()
});

static BARE_VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("bare video id pattern compiles"));

/// Extracts a video id from a URL or a bare id string.
///
/// Returns `None` when the input matches none of the known shapes.
#[must_use]
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();

    if BARE_VIDEO_ID.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(trimmed)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
    })
}
