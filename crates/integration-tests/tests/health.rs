//! Integration tests for the health endpoints.

use reqwest::StatusCode;
use retail_hub_integration_tests::TestServer;

#[tokio::test]
async fn test_liveness() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .expect("Failed to get health");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_readiness() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .get(server.url("/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_header_returned() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .get(server.url("/api/products"))
        .header("x-request-id", "front-till-01")
        .send()
        .await
        .expect("Failed to get products");

    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("front-till-01")
    );
}
