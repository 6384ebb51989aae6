//! Prometheus metric definitions.
use prometheus::{
    Counter, Histogram, Registry, register_counter_with_registry,
    register_histogram_with_registry,
};

/// Metric collectors for the worker.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub videos_analyzed: Counter,
    pub videos_failed: Counter,
    pub comments_fetched: Counter,
    pub comments_positive: Counter,
    pub comments_negative: Counter,
    pub comments_neutral: Counter,
    pub comments_unidentified: Counter,
    pub fetch_duration: Histogram,
    pub classify_duration: Histogram,
}

impl Metrics {
    /// Registers the worker's collectors against the given registry.
    ///
    /// # Errors
    /// Returns an error when a collector cannot be registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            videos_analyzed: register_counter_with_registry!(
                "sentiment_videos_analyzed_total",
                "Total number of videos analyzed",
                registry
            )?,
            videos_failed: register_counter_with_registry!(
                "sentiment_videos_failed_total",
                "Total number of videos that could not be processed",
                registry
            )?,
            comments_fetched: register_counter_with_registry!(
                "sentiment_comments_fetched_total",
                "Total number of comments fetched from the upstream API",
                registry
            )?,
            comments_positive: register_counter_with_registry!(
                "sentiment_comments_positive_total",
                "Comments classified as positive",
                registry
            )?,
            comments_negative: register_counter_with_registry!(
                "sentiment_comments_negative_total",
                "Comments classified as negative",
                registry
            )?,
            comments_neutral: register_counter_with_registry!(
                "sentiment_comments_neutral_total",
                "Comments classified as neutral",
                registry
            )?,
            comments_unidentified: register_counter_with_registry!(
                "sentiment_comments_unidentified_total",
                "Comments classified as unidentified",
                registry
            )?,
            fetch_duration: register_histogram_with_registry!(
                "sentiment_fetch_duration_seconds",
                "Duration of comment fetch operations",
                registry
            )?,
            classify_duration: register_histogram_with_registry!(
                "sentiment_classify_duration_seconds",
                "Duration of classification runs",
                registry
            )?,
        })
    }
}
