pub(crate) mod analyze;
pub(crate) mod health;
pub(crate) mod metrics;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::app::AppState;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/ready", get(health::ready))
        .route("/health/live", get(health::live))
        .route("/metrics", get(metrics::exporter))
        .route("/v1/videos/analyze", post(analyze::analyze_by_url))
        .route(
            "/v1/videos/{video_id}/sentiment",
            get(analyze::sentiment_by_id),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
