use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    app::AppState,
    classifier::{AggregateResult, ClassifiedComment},
    clients::FetchError,
    util::extract_video_id,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    url: String,
}

#[derive(Debug, Serialize)]
struct SentimentReportResponse {
    video_id: String,
    total_comments: u64,
    positive: u64,
    negative: u64,
    neutral: u64,
    unidentified: u64,
    comments: Vec<ClassifiedComment>,
}

impl SentimentReportResponse {
    fn new(video_id: String, result: AggregateResult) -> Self {
        Self {
            video_id,
            total_comments: result.total(),
            positive: result.positive,
            negative: result.negative,
            neutral: result.neutral,
            unidentified: result.unidentified,
            comments: result.comments,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// POST /v1/videos/analyze
pub(crate) async fn analyze_by_url(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let Some(video_id) = extract_video_id(&payload.url) else {
        let body = Json(ErrorResponse {
            error: "could not extract a video id from the given url".to_string(),
        });
        return (StatusCode::BAD_REQUEST, body).into_response();
    };

    run_analysis(&state, &video_id).await
}

/// GET /v1/videos/{video_id}/sentiment
pub(crate) async fn sentiment_by_id(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    let Some(video_id) = extract_video_id(&video_id) else {
        let body = Json(ErrorResponse {
            error: "invalid video id".to_string(),
        });
        return (StatusCode::BAD_REQUEST, body).into_response();
    };

    run_analysis(&state, &video_id).await
}

/// Fetches the video's comments and runs the classification pipeline.
/// Fetch failures surface here; the pipeline is never invoked for them.
async fn run_analysis(state: &AppState, video_id: &str) -> axum::response::Response {
    let metrics = state.telemetry().metrics().clone();

    let fetch_timer = metrics.fetch_duration.start_timer();
    let fetched = state.youtube_client().fetch_comments(video_id).await;
    fetch_timer.observe_duration();

    let comments = match fetched {
        Ok(comments) => comments,
        Err(error @ FetchError::VideoNotFound { .. }) => {
            metrics.videos_failed.inc();
            error!(video_id, %error, "video could not be resolved");
            let body = Json(ErrorResponse {
                error: "video could not be processed".to_string(),
            });
            return (StatusCode::NOT_FOUND, body).into_response();
        }
        Err(error) => {
            metrics.videos_failed.inc();
            error!(video_id, %error, "comment fetch failed");
            let body = Json(ErrorResponse {
                error: "upstream comment service failed".to_string(),
            });
            return (StatusCode::BAD_GATEWAY, body).into_response();
        }
    };

    #[allow(clippy::cast_precision_loss)]
    metrics.comments_fetched.inc_by(comments.len() as f64);

    let classify_timer = metrics.classify_duration.start_timer();
    let result = state.classifier().classify_many(&comments);
    classify_timer.observe_duration();

    metrics.videos_analyzed.inc();
    #[allow(clippy::cast_precision_loss)]
    {
        metrics.comments_positive.inc_by(result.positive as f64);
        metrics.comments_negative.inc_by(result.negative as f64);
        metrics.comments_neutral.inc_by(result.neutral as f64);
        metrics
            .comments_unidentified
            .inc_by(result.unidentified as f64);
    }

    info!(
        video_id,
        comments = result.total(),
        positive = result.positive,
        negative = result.negative,
        neutral = result.neutral,
        unidentified = result.unidentified,
        "video analyzed"
    );

    let body = Json(SentimentReportResponse::new(video_id.to_string(), result));
    (StatusCode::OK, body).into_response()
}
