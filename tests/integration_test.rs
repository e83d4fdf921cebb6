/// Integration tests for the relay HTTP surface
mod test_utilities;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use infrabot_relay::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use test_utilities::mocks::*;
use tower::ServiceExt;

fn mock_router() -> Router {
    let relay = RelayFactory::create(BackendMode::Mock, "http://localhost:8000").unwrap();
    build_router(AppState::new(relay))
}

fn router_with(backend: MockInfraBackend) -> Router {
    build_router(AppState::new(Arc::new(RelayUseCase::new(backend))))
}

async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_init_missing_workdir_is_400() {
    let (status, body) = post_json(mock_router(), "/api/init", r#"{"verbose": true}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "workdir is required");
}

#[tokio::test]
async fn test_init_empty_body_is_400() {
    let (status, body) = post_json(mock_router(), "/api/init", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "workdir is required");
}

#[tokio::test]
async fn test_init_malformed_json_is_400() {
    let (status, body) = post_json(mock_router(), "/api/init", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body:"));
}

#[tokio::test]
async fn test_init_mock_echoes_workdir() {
    let (status, body) =
        post_json(mock_router(), "/api/init", r#"{"workdir": "./infra/demo"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Project initialized successfully",
            "workdir": "./infra/demo"
        })
    );
}

#[tokio::test]
async fn test_component_missing_prompt_is_400() {
    let (status, body) = post_json(
        mock_router(),
        "/api/component/create",
        r#"{"workdir": "./p"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_message"], "prompt is required");
}

#[tokio::test]
async fn test_component_missing_workdir_is_400() {
    let (status, body) = post_json(
        mock_router(),
        "/api/component/create",
        r#"{"prompt": "an s3 bucket"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_message"], "workdir is required");
}

#[tokio::test]
async fn test_component_prompt_checked_before_workdir() {
    let (_, body) = post_json(mock_router(), "/api/component/create", "{}").await;
    assert_eq!(body["error_message"], "prompt is required");
}

#[tokio::test]
async fn test_component_mock_s3() {
    let (status, body) = post_json(
        mock_router(),
        "/api/component/create",
        r#"{"prompt": "Create an S3 bucket with versioning", "workdir": "./p"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["component_name"], "main");
    assert!(body["terraform_code"]
        .as_str()
        .unwrap()
        .contains("aws_s3_bucket"));
    let keys: Vec<&String> = body["outputs"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["bucket_name", "bucket_arn"]);
}

#[tokio::test]
async fn test_component_mock_ec2_uses_given_name() {
    let (status, body) = post_json(
        mock_router(),
        "/api/component/create",
        r#"{"prompt": "Set up an EC2 instance", "workdir": "./p", "name": "web"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["component_name"], "web");
    let keys: Vec<&String> = body["outputs"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["instance_id", "public_ip"]);
}

#[tokio::test]
async fn test_component_mock_placeholder() {
    let (status, body) = post_json(
        mock_router(),
        "/api/component/create",
        r#"{"prompt": "a VPC with private subnets", "workdir": "./p"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["terraform_code"]
        .as_str()
        .unwrap()
        .contains("a VPC with private subnets"));
    assert_eq!(body["plan_summary"], "Resources to be determined");
    let keys: Vec<&String> = body["outputs"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["status"]);
}

#[tokio::test]
async fn test_projects_mock_listing_order() {
    let (status, body) = get(mock_router(), "/api/projects?parent_dir=/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Found 3 InfraBot projects",
            "projects": [
                "/data/production-infra",
                "/data/staging-infra",
                "/data/development-infra"
            ]
        })
    );
}

#[tokio::test]
async fn test_projects_default_parent_dir() {
    let (_, body) = get(mock_router(), "/api/projects").await;
    assert_eq!(body["projects"][0], "./production-infra");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(mock_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["mode"], "mock");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_validation_failure_never_reaches_backend() {
    let backend = MockInfraBackend::replying(RelayReply::ok(json!({"success": true})));
    let router = router_with(backend.clone());

    let (status, _) = post_json(router.clone(), "/api/init", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = post_json(router, "/api/component/create", r#"{"prompt": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn test_component_defaults_forwarded() {
    let backend = MockInfraBackend::replying(RelayReply::ok(json!({"success": true})));
    let router = router_with(backend.clone());

    let (status, _) = post_json(
        router,
        "/api/component/create",
        r#"{"prompt": "an s3 bucket", "workdir": "./p"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let requests = backend.component_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], ComponentCreateRequest::new("an s3 bucket", "./p"));
}

#[tokio::test]
async fn test_upstream_failure_is_502_with_detail() {
    let backend = MockInfraBackend::failing(|| RelayError::upstream("connection refused"));
    let (status, body) = get(router_with(backend), "/api/projects?parent_dir=/x").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "InfraBot service request failed: connection refused"
    );
    assert_eq!(body["error"], "connection refused");
}

#[tokio::test]
async fn test_internal_failure_is_500_with_generic_message() {
    let backend = MockInfraBackend::failing(|| RelayError::internal("serializer exploded"));
    let (status, body) = post_json(
        router_with(backend),
        "/api/component/create",
        r#"{"prompt": "x", "workdir": "./p"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_message"], "Failed to create component");
    assert_eq!(body["error"], "serializer exploded");
}
