//! General-purpose word polarity lexicon and the averaging scorer.
use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Word polarities in [-1, +1]. Sign gives direction, magnitude strength.
const WORD_POLARITIES: &[(&str, f64)] = &[
    // strongly positive
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("beautiful", 0.7),
    ("best", 0.8),
    ("brilliant", 0.8),
    ("excellent", 0.9),
    ("fantastic", 0.8),
    ("flawless", 0.8),
    ("incredible", 0.8),
    ("love", 0.7),
    ("loved", 0.7),
    ("lovely", 0.7),
    ("masterpiece", 0.9),
    ("outstanding", 0.9),
    ("perfect", 0.9),
    ("phenomenal", 0.9),
    ("stunning", 0.8),
    ("superb", 0.8),
    ("wonderful", 0.8),
    // moderately positive
    ("catchy", 0.5),
    ("cool", 0.4),
    ("enjoy", 0.5),
    ("enjoyable", 0.5),
    ("enjoyed", 0.5),
    ("entertaining", 0.5),
    ("fun", 0.5),
    ("funny", 0.5),
    ("glad", 0.5),
    ("good", 0.5),
    ("great", 0.6),
    ("happy", 0.6),
    ("helpful", 0.5),
    ("hilarious", 0.6),
    ("impressive", 0.6),
    ("informative", 0.5),
    ("inspiring", 0.6),
    ("interesting", 0.4),
    ("liked", 0.4),
    ("nice", 0.4),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("relaxing", 0.4),
    ("satisfying", 0.5),
    ("solid", 0.4),
    ("sweet", 0.4),
    ("thanks", 0.4),
    ("underrated", 0.4),
    ("useful", 0.5),
    ("wholesome", 0.6),
    ("win", 0.4),
    ("wow", 0.4),
    // moderately negative
    ("annoying", -0.5),
    ("bad", -0.5),
    ("bland", -0.4),
    ("boring", -0.4),
    ("broken", -0.4),
    ("cheap", -0.3),
    ("clickbait", -0.5),
    ("confusing", -0.4),
    ("cringe", -0.5),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("dislike", -0.5),
    ("disliked", -0.5),
    ("dull", -0.4),
    ("fail", -0.5),
    ("fake", -0.5),
    ("lame", -0.4),
    ("mediocre", -0.4),
    ("misleading", -0.5),
    ("overrated", -0.4),
    ("pointless", -0.5),
    ("sad", -0.4),
    ("slow", -0.3),
    ("tired", -0.3),
    ("weak", -0.4),
    ("weird", -0.3),
    ("wrong", -0.4),
    // strongly negative
    ("awful", -0.8),
    ("disgusting", -0.8),
    ("dreadful", -0.8),
    ("garbage", -0.8),
    ("hate", -0.7),
    ("hated", -0.7),
    ("horrible", -0.8),
    ("pathetic", -0.7),
    ("scam", -0.9),
    ("terrible", -0.8),
    ("trash", -0.7),
    ("unwatchable", -0.8),
    ("useless", -0.7),
    ("waste", -0.6),
    ("worst", -0.9),
    ("worthless", -0.8),
];

/// Static word-level polarity table with an averaging scorer.
#[derive(Debug)]
pub(crate) struct PolarityLexicon {
    scores: FxHashMap<&'static str, f64>,
}

impl PolarityLexicon {
    pub(crate) fn new() -> Self {
        Self {
            scores: WORD_POLARITIES.iter().copied().collect(),
        }
    }

    /// Mean polarity of the sentiment-bearing words, 0.0 when none match.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn average_polarity(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut hits = 0_usize;

        for word in text.unicode_words() {
            if let Some(polarity) = self.scores.get(word.to_lowercase().as_str()) {
                sum += polarity;
                hits += 1;
            }
        }

        if hits == 0 { 0.0 } else { sum / hits as f64 }
    }
}
