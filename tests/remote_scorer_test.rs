use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use dock_plugin::{router, AppContext, LocalManifestStore, RemoteScorer, Scorer};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

async fn dock(
    scorer: RemoteScorer,
    timeout: Option<Duration>,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let ctx = AppContext::new(Arc::new(scorer), Arc::new(LocalManifestStore::new(".")))
        .with_scorer_timeout(timeout);

    let response = router(ctx)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_remote_score_is_forwarded() {
    let server = MockServer::start_async().await;
    let score_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/score").query_param("sequence", "MKTAYIAKQR");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"value": -42.5}));
        })
        .await;

    let scorer = RemoteScorer::new(server.url("/score"), None).unwrap();
    let (status, json) = dock(scorer, None, "/dock?sequence=MKTAYIAKQR").await;

    score_mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sequence"], "MKTAYIAKQR");
    assert_eq!(json["energy"]["value"], -42.5);
}

#[tokio::test]
async fn test_remote_error_status_becomes_400() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/score");
            then.status(503).body("overloaded");
        })
        .await;

    let scorer = RemoteScorer::new(server.url("/score"), None).unwrap();
    let (status, json) = dock(scorer, None, "/dock?sequence=ABC").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("503"));
    assert!(json.get("energy").is_none());
}

#[tokio::test]
async fn test_malformed_remote_body_becomes_400() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/score");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"score": "high"}));
        })
        .await;

    let scorer = RemoteScorer::new(server.url("/score"), None).unwrap();
    let (status, json) = dock(scorer, None, "/dock?sequence=ABC").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Remote scorer returned an unreadable body"));
    assert!(!error.contains(&server.address().to_string()));
    assert!(!error.contains("/score"));
}

#[tokio::test]
async fn test_unreachable_remote_hides_endpoint() {
    // 取得一個沒有人在聽的 port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}/internal/score", addr);
    let scorer = RemoteScorer::new(endpoint, None).unwrap();
    let (status, json) = dock(scorer, None, "/dock?sequence=ABC").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Remote scorer request failed"));
    assert!(!error.contains(&addr.port().to_string()));
    assert!(!error.contains("/internal/score"));
}

#[tokio::test]
async fn test_slow_remote_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/score");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(serde_json::json!({"value": 1.0}));
        })
        .await;

    let scorer = RemoteScorer::new(server.url("/score"), None).unwrap();
    let (status, json) = dock(
        scorer,
        Some(Duration::from_millis(100)),
        "/dock?sequence=ABC",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_missing_sequence_is_accepted() {
    let server = MockServer::start_async().await;
    let score_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/score");
            then.status(200).json_body(serde_json::json!({"value": 0.0}));
        })
        .await;

    let scorer = RemoteScorer::new(server.url("/score"), None).unwrap();
    assert_eq!(scorer.name(), "remote");
    let energy = scorer.score(None).await.unwrap();

    score_mock.assert_async().await;
    assert_eq!(energy.value, 0.0);
}
