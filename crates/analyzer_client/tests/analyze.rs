use std::time::Duration;

use analyzer_client::{AnalysisClient, ClientSettings, FailureKind, ReqwestAnalysisClient};
use analyzer_core::Failure;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestAnalysisClient {
    ReqwestAnalysisClient::new(ClientSettings::with_base_url(server.uri()))
}

#[tokio::test]
async fn posts_query_and_returns_papers_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "query": "Generative AI in Medicine" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "title": "Paper A", "link": "http://arxiv.org/abs/1", "summary": "Line1\nLine2" },
            { "title": "Paper B", "code_implementations": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let papers = client_for(&server)
        .analyze("Generative AI in Medicine")
        .await
        .expect("analyze ok");

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title.as_deref(), Some("Paper A"));
    assert_eq!(papers[0].summary.as_deref(), Some("Line1\nLine2"));
    assert_eq!(papers[1].title.as_deref(), Some("Paper B"));
    assert_eq!(papers[1].code_implementations, None);
}

#[tokio::test]
async fn base_url_with_trailing_slash_hits_same_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAnalysisClient::new(ClientSettings::with_base_url(format!(
        "{}/",
        server.uri()
    )));
    let papers = client.analyze("q").await.expect("analyze ok");
    assert!(papers.is_empty());
}

#[tokio::test]
async fn server_error_status_is_a_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "groq down" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.kind.failure(), Failure::Network);
}

#[tokio::test]
async fn object_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "papers": [] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
    assert_eq!(err.kind.failure(), Failure::MalformedResponse);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::with_base_url(server.uri())
    };
    let err = ReqwestAnalysisClient::new(settings)
        .analyze("q")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.kind.failure(), Failure::Network);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"title\": \"long\"}]"))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_response_bytes: 8,
        ..ClientSettings::with_base_url(server.uri())
    };
    let err = ReqwestAnalysisClient::new(settings)
        .analyze("q")
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 8, .. }
    ));
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    // A released mock server either refuses the connection or answers 404.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let err = ReqwestAnalysisClient::new(ClientSettings::with_base_url(uri))
        .analyze("q")
        .await
        .unwrap_err();
    assert_eq!(err.kind.failure(), Failure::Network);
}

#[tokio::test]
async fn invalid_base_url_fails_without_request() {
    let client = ReqwestAnalysisClient::new(ClientSettings::with_base_url("localhost:8000"));
    let err = client.analyze("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

#[tokio::test]
async fn health_reports_service_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "healthy" })),
        )
        .mount(&server)
        .await;

    let status = client_for(&server).health().await.expect("health ok");
    assert_eq!(status, "healthy");
}

#[tokio::test]
async fn health_fails_on_missing_endpoint() {
    let server = MockServer::start().await;
    let err = client_for(&server).health().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}
