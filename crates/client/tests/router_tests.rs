//! Router error handling tests.
//!
//! # Invariants
//! - 401 becomes `Unauthorized` with the decoded message
//! - Other non-2xx statuses become `ApiError`
//! - The login page and exception envelopes are never treated as results

mod common;

use common::*;
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use zenoss_client::Router;

#[tokio::test]
async fn test_unauthorized_invalid_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DEVICE_ROUTER_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(load_fixture("errors/invalid_token.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(api_key_config(&mock_server));
    let err = client.find_device("hostname1").await.unwrap_err();

    match &err {
        ClientError::Unauthorized { message, errors } => {
            assert_eq!(message, "Invalid token");
            assert_eq!(errors[0].kind, "invalid_token");
            assert_eq!(errors[0].subject, "token");
        }
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DEVICE_ROUTER_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(user_pass_config(&mock_server));
    let err = client.find_device("hostname1").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            url,
            message,
        } => {
            assert_eq!(status, 500);
            assert!(url.ends_with(DEVICE_ROUTER_PATH));
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_page_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DEVICE_ROUTER_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture_text("errors/login_page.html"))
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(user_pass_config(&mock_server));
    let err = client.find_device("hostname1").await.unwrap_err();
    assert!(matches!(err, ClientError::AuthFailed(_)));
}

#[tokio::test]
async fn test_exception_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DEVICE_ROUTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("errors/router_exception.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(api_key_config(&mock_server));
    let err = client.find_device("hostname1").await.unwrap_err();

    match err {
        ClientError::RouterException { router, method, message } => {
            assert_eq!(router, "DeviceRouter");
            assert_eq!(method, "getDevices");
            assert!(message.contains("not found"));
        }
        other => panic!("Expected RouterException, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_device_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DEVICE_ROUTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {"devices": []}})))
        .mount(&mock_server)
        .await;

    let client = client_for(api_key_config(&mock_server));
    let err = client.find_device("hostname1").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_generic_router_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/zport/dmd/evconsole_router"))
        .and(body_partial_json(json!({
            "action": "EventsRouter",
            "method": "query",
            "type": "rpc"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"events": [], "totalCount": 0, "success": true},
            "tid": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(api_key_config(&mock_server));
    let result = client
        .router_request(
            Method::POST,
            Router::Events,
            "query",
            json!([{"limit": 10}]),
        )
        .await
        .unwrap();

    assert_eq!(result["totalCount"], 0);
}
