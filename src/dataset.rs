//! Labeled reference corpus for exact-match sentiment lookup.
//!
//! The corpus is a Sentiment140-shaped CSV: the polarity label sits in the
//! first column (0 = negative, 2 = neutral, 4 = positive) and the comment
//! text in the last. It is loaded once at startup and shared read-only for
//! the lifetime of the process.
use std::path::Path;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("malformed dataset record: {0}")]
    MalformedRecord(#[from] csv::Error),
    #[error("dataset contains no usable rows")]
    Empty,
}

/// Immutable exact-text polarity table.
#[derive(Debug)]
pub struct ReferenceDataset {
    polarity_by_text: FxHashMap<String, f64>,
}

impl ReferenceDataset {
    /// Loads the corpus from a headerless CSV file.
    ///
    /// Duplicate comment texts keep the first row's polarity. Rows with a
    /// label other than 0/2/4 are skipped.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when the file cannot be read, a record is
    /// malformed, or no usable rows remain.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| DatasetError::Read {
                path: path.display().to_string(),
                source,
            })?;

        let mut polarity_by_text = FxHashMap::default();
        let mut skipped = 0_usize;

        for result in reader.records() {
            let record = result?;
            let last = record.len().saturating_sub(1);
            let (Some(raw_label), Some(text)) = (record.get(0), record.get(last)) else {
                skipped += 1;
                continue;
            };

            let Some(polarity) = normalize_label(raw_label) else {
                skipped += 1;
                continue;
            };

            // First row wins on duplicate text.
            polarity_by_text
                .entry(text.to_string())
                .or_insert(polarity);
        }

        if skipped > 0 {
            warn!(skipped, "dataset rows skipped due to unusable labels");
        }

        if polarity_by_text.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { polarity_by_text })
    }

    /// Builds a dataset from already-normalized rows. Duplicate texts keep
    /// the first row's polarity.
    #[must_use]
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut polarity_by_text = FxHashMap::default();
        for (text, polarity) in rows {
            polarity_by_text.entry(text.into()).or_insert(polarity);
        }
        Self { polarity_by_text }
    }

    /// Exact, case-sensitive lookup of a comment text.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<f64> {
        self.polarity_by_text.get(text).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polarity_by_text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polarity_by_text.is_empty()
    }
}

/// Maps the corpus's integer polarity coding onto the scorer scale.
fn normalize_label(raw: &str) -> Option<f64> {
    match raw.trim() {
        "0" => Some(-1.0),
        "2" => Some(0.0),
        "4" => Some(1.0),
        _ => None,
    }
}
