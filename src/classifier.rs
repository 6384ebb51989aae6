//! Comment sentiment classification pipeline.
//!
//! Per comment: language gate → reference dataset lookup → fallback
//! scoring → sign-based category mapping. The pipeline is a pure function
//! of its input plus the immutable dataset; all I/O happens before it
//! runs.
use std::sync::Arc;

use serde::Serialize;

use crate::{
    dataset::ReferenceDataset,
    language::{self, LanguageVerdict},
    sentiment::SentimentAnalyzer,
};

/// Mutually exclusive sentiment label for one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
    Unidentified,
}

impl SentimentCategory {
    /// Sign-based mapping: any nonzero score is decisive, no dead band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// A comment paired with its assigned category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedComment {
    pub text: String,
    pub category: SentimentCategory,
}

/// Per-category counts plus the labeled comments in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub unidentified: u64,
    pub comments: Vec<ClassifiedComment>,
}

impl AggregateResult {
    fn record(&mut self, comment: ClassifiedComment) {
        match comment.category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Negative => self.negative += 1,
            SentimentCategory::Neutral => self.neutral += 1,
            SentimentCategory::Unidentified => self.unidentified += 1,
        }
        self.comments.push(comment);
    }

    /// Sum of all four counters; always equals `comments.len()`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral + self.unidentified
    }
}

/// Classifier over a shared read-only dataset and a fixed scorer pair.
#[derive(Debug)]
pub struct CommentClassifier {
    dataset: Arc<ReferenceDataset>,
    analyzer: SentimentAnalyzer,
}

impl CommentClassifier {
    #[must_use]
    pub fn new(dataset: Arc<ReferenceDataset>) -> Self {
        Self {
            dataset,
            analyzer: SentimentAnalyzer::new(),
        }
    }

    /// Classifies a single comment.
    ///
    /// Non-English and language-indeterminate comments are routed to
    /// [`SentimentCategory::Unidentified`] without any scoring. English
    /// comments take the dataset polarity when the exact text is known,
    /// and the fallback score otherwise.
    #[must_use]
    pub fn classify_one(&self, text: &str) -> ClassifiedComment {
        let category = match language::detect(text) {
            LanguageVerdict::NonEnglish(_) | LanguageVerdict::Undetermined => {
                SentimentCategory::Unidentified
            }
            LanguageVerdict::English => {
                let score = self
                    .dataset
                    .lookup(text)
                    .unwrap_or_else(|| self.analyzer.score(text));
                SentimentCategory::from_score(score)
            }
        };

        ClassifiedComment {
            text: text.to_string(),
            category,
        }
    }

    /// Classifies a comment list, preserving input order in the output.
    #[must_use]
    pub fn classify_many(&self, comments: &[String]) -> AggregateResult {
        let mut result = AggregateResult::default();
        for comment in comments {
            result.record(self.classify_one(comment));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_with(rows: &[(&str, f64)]) -> CommentClassifier {
        let dataset =
            ReferenceDataset::from_rows(rows.iter().map(|(text, polarity)| (*text, *polarity)));
        CommentClassifier::new(Arc::new(dataset))
    }

    fn owned(comments: &[&str]) -> Vec<String> {
        comments.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn category_mapping_follows_sign() {
        assert_eq!(
            SentimentCategory::from_score(0.001),
            SentimentCategory::Positive
        );
        assert_eq!(
            SentimentCategory::from_score(-0.001),
            SentimentCategory::Negative
        );
        assert_eq!(SentimentCategory::from_score(0.0), SentimentCategory::Neutral);
    }

    #[test]
    fn counts_always_sum_to_input_length() {
        let classifier = classifier_with(&[]);
        let comments = owned(&[
            "this video is really great and helpful",
            "this video is absolutely terrible and boring",
            "Este video me ha gustado muchísimo, gracias por compartirlo.",
            "the clip was uploaded on a tuesday afternoon",
            "!!!",
        ]);

        let result = classifier.classify_many(&comments);

        assert_eq!(result.total(), comments.len() as u64);
        assert_eq!(result.comments.len(), comments.len());
    }

    #[test]
    fn non_english_comment_is_unidentified_regardless_of_dataset() {
        let text = "Este video me ha gustado muchísimo, gracias por compartirlo.";
        // Even an exact dataset hit must not be consulted for it.
        let classifier = classifier_with(&[(text, 1.0)]);

        let classified = classifier.classify_one(text);

        assert_eq!(classified.category, SentimentCategory::Unidentified);
    }

    #[test]
    fn indeterminate_language_is_unidentified() {
        let classifier = classifier_with(&[]);

        assert_eq!(
            classifier.classify_one("").category,
            SentimentCategory::Unidentified
        );
        assert_eq!(
            classifier.classify_one("??? !!!").category,
            SentimentCategory::Unidentified
        );
    }

    #[test]
    fn dataset_hit_takes_precedence_over_fallback_scorers() {
        // The fallback scorers would call this clearly positive; the
        // dataset says negative, and the dataset must win.
        let text = "i really love this wonderful video so much";
        let classifier = classifier_with(&[(text, -1.0)]);

        let classified = classifier.classify_one(text);

        assert_eq!(classified.category, SentimentCategory::Negative);
    }

    #[test]
    fn dataset_polarity_maps_by_sign() {
        let classifier = classifier_with(&[
            ("this is the stored positive comment text", 1.0),
            ("this is the stored negative comment text", -1.0),
            ("this is the stored neutral comment text", 0.0),
        ]);

        assert_eq!(
            classifier
                .classify_one("this is the stored positive comment text")
                .category,
            SentimentCategory::Positive
        );
        assert_eq!(
            classifier
                .classify_one("this is the stored negative comment text")
                .category,
            SentimentCategory::Negative
        );
        assert_eq!(
            classifier
                .classify_one("this is the stored neutral comment text")
                .category,
            SentimentCategory::Neutral
        );
    }

    #[test]
    fn dataset_lookup_is_case_sensitive() {
        let classifier = classifier_with(&[("This Exact Comment Was Stored Here", -1.0)]);

        // Different casing misses the dataset and falls back to the
        // scorers, which see no sentiment-bearing words.
        let classified = classifier.classify_one("this exact comment was stored here");

        assert_eq!(classified.category, SentimentCategory::Neutral);
    }

    #[test]
    fn unknown_comment_without_signal_is_neutral() {
        let classifier = classifier_with(&[]);

        let classified = classifier.classify_one("the clip was uploaded on a tuesday afternoon");

        assert_eq!(classified.category, SentimentCategory::Neutral);
    }

    #[test]
    fn unknown_comment_uses_fallback_scorers() {
        let classifier = classifier_with(&[]);

        assert_eq!(
            classifier
                .classify_one("this video is really wonderful and helpful")
                .category,
            SentimentCategory::Positive
        );
        assert_eq!(
            classifier
                .classify_one("this video is really terrible and boring")
                .category,
            SentimentCategory::Negative
        );
    }

    #[test]
    fn output_order_matches_input_order() {
        let classifier = classifier_with(&[]);
        let comments = owned(&[
            "this video is really wonderful and helpful",
            "the clip was uploaded on a tuesday afternoon",
            "this video is really terrible and boring",
        ]);

        let result = classifier.classify_many(&comments);

        let texts: Vec<&str> = result
            .comments
            .iter()
            .map(|comment| comment.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "this video is really wonderful and helpful",
                "the clip was uploaded on a tuesday afternoon",
                "this video is really terrible and boring",
            ]
        );

        let reversed = owned(&[
            "this video is really terrible and boring",
            "the clip was uploaded on a tuesday afternoon",
            "this video is really wonderful and helpful",
        ]);
        let result = classifier.classify_many(&reversed);
        assert_eq!(result.comments[0].category, SentimentCategory::Negative);
        assert_eq!(result.comments[2].category, SentimentCategory::Positive);
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = classifier_with(&[("this video is really wonderful and helpful", -1.0)]);
        let comments = owned(&[
            "this video is really wonderful and helpful",
            "this video is really terrible and boring",
            "Este video me ha gustado muchísimo, gracias por compartirlo.",
        ]);

        let first = classifier.classify_many(&comments);
        let second = classifier.classify_many(&comments);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let classifier = classifier_with(&[]);

        let result = classifier.classify_many(&[]);

        assert_eq!(result.total(), 0);
        assert!(result.comments.is_empty());
    }
}
