use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;

use crate::{
    api,
    classifier::CommentClassifier,
    clients::{YouTubeClient, YouTubeClientConfig},
    config::Config,
    dataset::ReferenceDataset,
    observability::Telemetry,
};

#[derive(Clone)]
pub(crate) struct AppState {
    registry: Arc<ComponentRegistry>,
}

pub struct ComponentRegistry {
    config: Arc<Config>,
    telemetry: Telemetry,
    youtube_client: Arc<YouTubeClient>,
    dataset: Arc<ReferenceDataset>,
    classifier: Arc<CommentClassifier>,
}

impl AppState {
    pub(crate) fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub(crate) fn telemetry(&self) -> &Telemetry {
        &self.registry.telemetry
    }

    pub(crate) fn youtube_client(&self) -> Arc<YouTubeClient> {
        Arc::clone(&self.registry.youtube_client)
    }

    pub(crate) fn dataset(&self) -> Arc<ReferenceDataset> {
        Arc::clone(&self.registry.dataset)
    }

    pub(crate) fn classifier(&self) -> Arc<CommentClassifier> {
        Arc::clone(&self.registry.classifier)
    }
}

impl ComponentRegistry {
    /// Initializes configuration-driven dependencies and builds the shared
    /// application registry. The reference dataset is loaded here, once,
    /// and frozen for the lifetime of the process.
    ///
    /// # Errors
    /// Returns an error when telemetry setup, HTTP client construction, or
    /// the dataset load fails.
    pub fn build(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let telemetry = Telemetry::new()?;
        let youtube_client = Arc::new(YouTubeClient::new(YouTubeClientConfig {
            base_url: config.youtube_api_base_url().to_string(),
            api_key: config.youtube_api_key().to_string(),
            connect_timeout: config.youtube_connect_timeout(),
            total_timeout: config.youtube_total_timeout(),
            max_comments: config.max_comments(),
        })?);
        let dataset = Arc::new(
            ReferenceDataset::from_csv_path(config.dataset_path())
                .with_context(|| format!("failed to load dataset at {}", config.dataset_path()))?,
        );
        let classifier = Arc::new(CommentClassifier::new(Arc::clone(&dataset)));

        Ok(Self {
            config,
            telemetry,
            youtube_client,
            dataset,
            classifier,
        })
    }

    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }
}

pub fn build_router(registry: ComponentRegistry) -> Router {
    let state = AppState::new(registry);
    api::router(state)
}
