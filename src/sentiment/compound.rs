//! Rule-based compound scorer for short, informal comment text.
//!
//! A valence lexicon combined with heuristics for negation, degree
//! modifiers, all-caps emphasis and exclamation emphasis. The summed
//! valence is normalized into [-1, +1].
use rustc_hash::{FxHashMap, FxHashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Raw word valences, roughly on a [-4, +4] scale.
const WORD_VALENCES: &[(&str, f64)] = &[
    ("adore", 3.2),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("awful", -2.9),
    ("bad", -2.5),
    ("best", 3.2),
    ("bland", -1.4),
    ("boring", -1.8),
    ("brilliant", 2.8),
    ("catchy", 1.5),
    ("clickbait", -2.0),
    ("cool", 1.3),
    ("cringe", -2.0),
    ("disappointed", -2.2),
    ("disappointing", -2.2),
    ("disgusting", -3.0),
    ("dislike", -1.6),
    ("dull", -1.7),
    ("enjoy", 1.8),
    ("enjoyable", 1.9),
    ("enjoyed", 1.8),
    ("entertaining", 1.9),
    ("excellent", 3.1),
    ("fail", -2.3),
    ("fake", -2.1),
    ("fantastic", 3.0),
    ("favorite", 2.2),
    ("fun", 2.2),
    ("funny", 1.9),
    ("garbage", -3.1),
    ("glad", 1.7),
    ("good", 1.9),
    ("great", 2.5),
    ("happy", 2.1),
    ("hate", -2.7),
    ("hated", -2.7),
    ("helpful", 1.8),
    ("hilarious", 2.4),
    ("horrible", -2.9),
    ("impressive", 2.3),
    ("incredible", 2.9),
    ("informative", 1.7),
    ("inspiring", 2.3),
    ("interesting", 1.4),
    ("lame", -1.8),
    ("like", 1.5),
    ("liked", 1.5),
    ("love", 3.0),
    ("loved", 2.9),
    ("lovely", 2.6),
    ("masterpiece", 3.4),
    ("mediocre", -1.5),
    ("misleading", -2.0),
    ("nice", 1.8),
    ("outstanding", 3.2),
    ("overrated", -1.6),
    ("pathetic", -2.5),
    ("perfect", 3.3),
    ("pointless", -2.1),
    ("recommend", 1.7),
    ("sad", -1.9),
    ("satisfying", 1.9),
    ("scam", -3.3),
    ("stunning", 2.8),
    ("superb", 3.0),
    ("sweet", 1.6),
    ("terrible", -2.9),
    ("thanks", 1.4),
    ("trash", -2.6),
    ("underrated", 1.3),
    ("unwatchable", -3.0),
    ("useful", 1.7),
    ("useless", -2.4),
    ("waste", -2.2),
    ("weak", -1.5),
    ("weird", -1.0),
    ("wholesome", 2.2),
    ("win", 1.6),
    ("wonderful", 2.9),
    ("worst", -3.4),
    ("worthless", -2.9),
    ("wow", 1.5),
    ("wrong", -1.5),
];

/// Degree modifiers: positive scalars intensify, negative ones dampen.
const DEGREE_MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 0.4),
    ("barely", -0.4),
    ("completely", 0.35),
    ("extremely", 0.45),
    ("fairly", -0.2),
    ("hardly", -0.4),
    ("incredibly", 0.45),
    ("kinda", -0.3),
    ("really", 0.3),
    ("slightly", -0.35),
    ("so", 0.3),
    ("somewhat", -0.3),
    ("super", 0.35),
    ("totally", 0.35),
    ("truly", 0.3),
    ("very", 0.3),
];

const NEGATIONS: &[&str] = &[
    "ain't", "aint", "aren't", "arent", "can't", "cannot", "cant", "couldn't", "couldnt",
    "didn't", "didnt", "doesn't", "doesnt", "don't", "dont", "hardly", "isn't", "isnt",
    "neither", "never", "no", "nobody", "none", "not", "nothing", "nowhere", "wasn't",
    "wasnt", "won't", "wont", "wouldn't", "wouldnt",
];

/// Valence flip applied when a negation precedes a sentiment word.
const NEGATION_FACTOR: f64 = -0.74;
/// Extra valence for an all-caps sentiment word in mixed-case text.
const ALLCAPS_EMPHASIS: f64 = 0.733;
/// Extra valence per exclamation mark, capped at four marks.
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant for mapping the valence sum into [-1, +1].
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How many preceding words are inspected for modifiers and negations.
const CONTEXT_WINDOW: usize = 3;
/// Decay of a degree modifier's influence with distance from the word.
const MODIFIER_DECAY: [f64; CONTEXT_WINDOW] = [1.0, 0.95, 0.9];

#[derive(Debug)]
pub(crate) struct CompoundScorer {
    valences: FxHashMap<&'static str, f64>,
    modifiers: FxHashMap<&'static str, f64>,
    negations: FxHashSet<&'static str>,
}

impl CompoundScorer {
    pub(crate) fn new() -> Self {
        Self {
            valences: WORD_VALENCES.iter().copied().collect(),
            modifiers: DEGREE_MODIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Normalized compound score in [-1, +1], 0.0 for empty or signal-free
    /// text.
    pub(crate) fn score(&self, text: &str) -> f64 {
        let words: Vec<&str> = text.unicode_words().collect();
        if words.is_empty() {
            return 0.0;
        }

        let lowered: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
        let emphasis_allowed = mixed_case(&words);

        let mut total = 0.0;
        for (index, word) in lowered.iter().enumerate() {
            let Some(&base) = self.valences.get(word.as_str()) else {
                continue;
            };
            let mut valence = base;

            if emphasis_allowed && is_all_caps(words[index]) {
                valence += ALLCAPS_EMPHASIS * valence.signum();
            }

            for (distance, decay) in MODIFIER_DECAY.iter().enumerate() {
                let Some(context_index) = index.checked_sub(distance + 1) else {
                    break;
                };
                let context = lowered[context_index].as_str();

                if let Some(&scalar) = self.modifiers.get(context) {
                    valence += scalar * decay * valence.signum();
                }
                if self.negations.contains(context) {
                    valence *= NEGATION_FACTOR;
                }
            }

            total += valence;
        }

        if total == 0.0 {
            return 0.0;
        }

        total += exclamation_emphasis(text) * total.signum();

        normalize(total)
    }
}

/// True when the text mixes cased styles, so all-caps words stand out.
fn mixed_case(words: &[&str]) -> bool {
    let caps = words.iter().filter(|word| is_all_caps(word)).count();
    caps > 0 && caps < words.len()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

#[allow(clippy::cast_precision_loss)]
fn exclamation_emphasis(text: &str) -> f64 {
    let marks = text.matches('!').count().min(MAX_EXCLAMATIONS);
    marks as f64 * EXCLAMATION_EMPHASIS
}

fn normalize(total: f64) -> f64 {
    let normalized = total / (total * total + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}
