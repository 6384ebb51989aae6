//! End-to-end tests: HTTP surface → comment fetch → classification.
use std::io::Write;

use once_cell::sync::Lazy;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentiment_worker::{
    app::{ComponentRegistry, build_router},
    config::Config,
};

static ENV_MUTEX: Lazy<std::sync::Mutex<()>> = Lazy::new(|| std::sync::Mutex::new(()));

fn thread(text: &str) -> Value {
    json!({
        "snippet": {
            "topLevelComment": { "snippet": { "textDisplay": text } }
        }
    })
}

fn write_corpus(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp corpus");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    file.flush().expect("flush");
    file
}

/// Builds the registry against a mock upstream and a temp corpus.
fn registry_for(server: &MockServer, corpus: &tempfile::NamedTempFile) -> ComponentRegistry {
    let config = {
        let _lock = ENV_MUTEX.lock().expect("env mutex");
        // SAFETY: env access is serialized through ENV_MUTEX.
        unsafe {
            std::env::set_var(
                "SENTIMENT_DATASET_PATH",
                corpus.path().to_str().expect("utf-8 path"),
            );
            std::env::set_var("YOUTUBE_API_KEY", "test-key");
            std::env::set_var("YOUTUBE_API_BASE_URL", format!("{}/", server.uri()));
        }
        Config::from_env().expect("config loads")
    };

    ComponentRegistry::build(config).expect("registry builds")
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("valid json")
}

#[tokio::test]
async fn analyze_endpoint_returns_full_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                thread("this video is really wonderful and helpful"),
                thread("this video is really terrible and boring"),
                thread("the clip was uploaded on a tuesday afternoon"),
                thread("Este video me ha gustado muchísimo, gracias por compartirlo."),
                thread("i really love this wonderful video so much"),
            ]
        })))
        .mount(&server)
        .await;

    // The last comment exists in the corpus with a negative label, so the
    // lookup must override the otherwise positive fallback score.
    let corpus = write_corpus(&[r#"0,1,"d","q","u","i really love this wonderful video so much""#]);
    let app = build_router(registry_for(&server, &corpus));

    let request = axum::http::Request::post("/v1/videos/analyze")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }).to_string(),
        ))
        .expect("request builds");

    let response = app.clone().oneshot(request).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let payload = response_json(response).await;
    assert_eq!(payload["video_id"], "dQw4w9WgXcQ");
    assert_eq!(payload["total_comments"], 5);
    assert_eq!(payload["positive"], 1);
    assert_eq!(payload["negative"], 2);
    assert_eq!(payload["neutral"], 1);
    assert_eq!(payload["unidentified"], 1);

    let comments = payload["comments"].as_array().expect("comments array");
    assert_eq!(comments.len(), 5);
    // Output order matches input order.
    assert_eq!(
        comments[0]["text"],
        "this video is really wonderful and helpful"
    );
    assert_eq!(comments[0]["category"], "positive");
    assert_eq!(comments[1]["category"], "negative");
    assert_eq!(comments[2]["category"], "neutral");
    assert_eq!(comments[3]["category"], "unidentified");
    assert_eq!(comments[4]["category"], "negative");

    // The analysis shows up on the metrics surface.
    let metrics_request = axum::http::Request::get("/metrics")
        .body(axum::body::Body::empty())
        .expect("request builds");
    let metrics_response = app
        .oneshot(metrics_request)
        .await
        .expect("request succeeds");
    let body = axum::body::to_bytes(metrics_response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let rendered = String::from_utf8(body.to_vec()).expect("utf-8 metrics");
    assert!(rendered.contains("sentiment_videos_analyzed_total 1"));
    assert!(rendered.contains("sentiment_comments_fetched_total 5"));
}

#[tokio::test]
async fn sentiment_by_id_endpoint_returns_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [thread("this video is really wonderful and helpful")]
        })))
        .mount(&server)
        .await;

    let corpus = write_corpus(&[r#"4,1,"d","q","u","placeholder row""#]);
    let app = build_router(registry_for(&server, &corpus));

    let request = axum::http::Request::get("/v1/videos/dQw4w9WgXcQ/sentiment")
        .body(axum::body::Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let payload = response_json(response).await;
    assert_eq!(payload["total_comments"], 1);
    assert_eq!(payload["positive"], 1);
}

#[tokio::test]
async fn unresolvable_video_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let corpus = write_corpus(&[r#"4,1,"d","q","u","placeholder row""#]);
    let app = build_router(registry_for(&server, &corpus));

    let request = axum::http::Request::post("/v1/videos/analyze")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({ "url": "https://youtu.be/eeeeeeeeeee" }).to_string(),
        ))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

    let payload = response_json(response).await;
    assert_eq!(payload["error"], "video could not be processed");
}

#[tokio::test]
async fn unparsable_url_is_rejected_without_upstream_call() {
    // No mock is mounted; the server must never be reached.
    let server = MockServer::start().await;

    let corpus = write_corpus(&[r#"4,1,"d","q","u","placeholder row""#]);
    let app = build_router(registry_for(&server, &corpus));

    let request = axum::http::Request::post("/v1/videos/analyze")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({ "url": "https://example.com/not-a-video" }).to_string(),
        ))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);

    assert!(server.received_requests().await.expect("requests").is_empty());
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let corpus = write_corpus(&[r#"4,1,"d","q","u","placeholder row""#]);
    let app = build_router(registry_for(&server, &corpus));

    let request = axum::http::Request::get("/v1/videos/dQw4w9WgXcQ/sentiment")
        .body(axum::body::Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn health_endpoints_respond() {
    let server = MockServer::start().await;
    let corpus = write_corpus(&[r#"4,1,"d","q","u","placeholder row""#]);
    let app = build_router(registry_for(&server, &corpus));

    let live = axum::http::Request::get("/health/live")
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = app.clone().oneshot(live).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let ready = axum::http::Request::get("/health/ready")
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = app.oneshot(ready).await.expect("request succeeds");
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let payload = response_json(response).await;
    assert_eq!(payload["status"], "ready");
}
