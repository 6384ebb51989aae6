//! Fallback sentiment scoring for comments absent from the reference corpus.
//!
//! Two independent heuristics produce a score in [-1, +1]: a plain
//! lexicon average and a rule-based compound scorer tuned for short,
//! informal text. The more confident (larger magnitude) score wins.
mod compound;
mod lexicon;

use compound::CompoundScorer;
use lexicon::PolarityLexicon;

/// Keeps the score with the larger absolute magnitude. On a tie the
/// compound score is kept.
#[must_use]
pub fn select_score(lexicon_score: f64, compound_score: f64) -> f64 {
    if lexicon_score.abs() > compound_score.abs() {
        lexicon_score
    } else {
        compound_score
    }
}

/// Dual-heuristic sentiment scorer.
#[derive(Debug)]
pub struct SentimentAnalyzer {
    lexicon: PolarityLexicon,
    compound: CompoundScorer,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: PolarityLexicon::new(),
            compound: CompoundScorer::new(),
        }
    }

    /// Scores a comment in [-1, +1]. Zero means no sentiment signal.
    ///
    /// This never fails; a comment with no sentiment-bearing words scores
    /// exactly zero on both heuristics.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        select_score(self.lexicon.average_polarity(text), self.compound.score(text))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
