//! `lingua`-based language gate for user comments.
//!
//! The detector is restricted to the languages that actually show up in
//! comment sections; anything it cannot place with enough confidence is
//! reported as undetermined rather than guessed.
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
use once_cell::sync::Lazy;

/// Detector over a fixed set of common comment languages.
static DETECTOR: Lazy<LanguageDetector> = Lazy::new(|| {
    LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::Spanish,
        Language::Portuguese,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Dutch,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
        Language::Hindi,
        Language::Turkish,
        Language::Indonesian,
    ])
    .with_minimum_relative_distance(0.01)
    .build()
});

/// Minimum confidence below which a detection is treated as undetermined.
/// Configurable via `SENTIMENT_LANG_MIN_CONFIDENCE` (default: 0.5).
fn min_confidence() -> f64 {
    std::env::var("SENTIMENT_LANG_MIN_CONFIDENCE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.5)
}

/// Outcome of language identification for a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageVerdict {
    English,
    NonEnglish(Language),
    Undetermined,
}

/// Identifies the language of a comment.
///
/// Empty or symbol-only text, and anything below the confidence floor,
/// yields [`LanguageVerdict::Undetermined`].
#[must_use]
pub fn detect(text: &str) -> LanguageVerdict {
    if text.trim().is_empty() {
        return LanguageVerdict::Undetermined;
    }

    let Some(detected) = DETECTOR.detect_language_of(text) else {
        return LanguageVerdict::Undetermined;
    };

    let confidence = DETECTOR
        .compute_language_confidence_values(text)
        .iter()
        .find(|(language, _)| *language == detected)
        .map_or(0.0, |(_, confidence)| *confidence);

    if confidence < min_confidence() {
        return LanguageVerdict::Undetermined;
    }

    if detected == Language::English {
        LanguageVerdict::English
    } else {
        LanguageVerdict::NonEnglish(detected)
    }
}
