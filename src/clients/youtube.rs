//! Comment fetch client for the YouTube Data API v3.
//!
//! Fetches plain-text top-level comments for a video, following page
//! tokens until the configured maximum is reached.
use std::{num::NonZeroUsize, time::Duration};

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the comment fetch boundary. The classifier is never
/// invoked when fetching fails.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("video {video_id} could not be resolved")]
    VideoNotFound { video_id: String },
    #[error("upstream API returned status {status}")]
    UpstreamStatus { status: StatusCode },
    #[error("upstream API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Paged `commentThreads` response, reduced to the fields we consume.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub(crate) struct YouTubeClientConfig {
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) connect_timeout: Duration,
    pub(crate) total_timeout: Duration,
    pub(crate) max_comments: NonZeroUsize,
}

/// Client for the YouTube Data API v3.
#[derive(Debug, Clone)]
pub(crate) struct YouTubeClient {
    client: Client,
    comment_threads_url: Url,
    api_key: String,
    max_comments: NonZeroUsize,
}

impl YouTubeClient {
    /// Builds a new client.
    ///
    /// # Errors
    /// Returns an error when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub(crate) fn new(config: YouTubeClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.total_timeout)
            .build()
            .context("failed to build YouTube HTTP client")?;

        let base_url = Url::parse(&config.base_url).context("invalid YouTube API base URL")?;
        let comment_threads_url = base_url
            .join("commentThreads")
            .context("failed to build commentThreads URL")?;

        Ok(Self {
            client,
            comment_threads_url,
            api_key: config.api_key,
            max_comments: config.max_comments,
        })
    }

    /// Fetches up to the configured maximum of top-level comments for a
    /// video, following page tokens as needed.
    ///
    /// # Errors
    /// Returns [`FetchError::VideoNotFound`] when the upstream reports the
    /// video as unresolvable, and [`FetchError::UpstreamStatus`] /
    /// [`FetchError::Transport`] for other failures.
    pub(crate) async fn fetch_comments(&self, video_id: &str) -> Result<Vec<String>, FetchError> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0_usize;

        loop {
            page_count += 1;
            let remaining = self.max_comments.get() - comments.len();
            debug!(video_id, page = page_count, remaining, "fetching comment page");

            let page = self
                .fetch_page(video_id, remaining.min(100), page_token.as_deref())
                .await?;

            comments.extend(
                page.items
                    .into_iter()
                    .map(|thread| thread.snippet.top_level_comment.snippet.text_display),
            );
            comments.truncate(self.max_comments.get());

            if comments.len() >= self.max_comments.get() || page.next_page_token.is_none() {
                break;
            }
            page_token = page.next_page_token;
        }

        debug!(video_id, comments = comments.len(), "fetched comments");
        Ok(comments)
    }

    async fn fetch_page(
        &self,
        video_id: &str,
        max_results: usize,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsResponse, FetchError> {
        let mut url = self.comment_threads_url.clone();

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("part", "snippet");
            query_pairs.append_pair("videoId", video_id);
            query_pairs.append_pair("textFormat", "plainText");
            query_pairs.append_pair("maxResults", &max_results.to_string());
            query_pairs.append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                query_pairs.append_pair("pageToken", token);
            }
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::VideoNotFound {
                video_id: video_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus { status });
        }

        Ok(response.json::<CommentThreadsResponse>().await?)
    }
}
