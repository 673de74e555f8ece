/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the request core
[POS]:    Integration tests - headers, payload parsing, error messages
[UPDATE]: When request core behavior changes
*/

mod common;

use std::sync::Arc;

use common::{anonymous_client, client_with_store, mock_session_token, setup_mock_server};
use kantor_adapter::{CredentialStore, KantorError, MemoryCredentialStore, RequestOptions};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::{Value, json};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_no_authorization_without_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rates/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"date": "2026-01-16", "rates": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    assert_ok!(client.rates_latest().await);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(requests[0].headers.get("content-type").unwrap(), "application/json");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_bearer_follows_latest_saved_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/wallet/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balancePLN": 0})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let client = client_with_store(&server, store.clone());

    let token = mock_session_token();
    assert_ok!(store.save(&token).await);
    assert_ok!(client.wallet_me().await);

    assert_ok!(store.save("second").await);
    assert_ok!(client.wallet_me().await);

    assert_ok!(store.clear().await);
    assert_ok!(client.wallet_me().await);

    let requests = server.received_requests().await.expect("recording enabled");
    let auth: Vec<Option<String>> = requests
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .map(|v| v.to_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(
        auth,
        vec![Some(format!("Bearer {token}")), Some("Bearer second".to_string()), None]
    );
}

#[tokio::test]
async fn test_caller_headers_merge_under_defaults() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rates/latest"))
        .and(header("content-type", "application/json"))
        .and(header("x-client", "cli"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, Arc::new(MemoryCredentialStore::with_token("tok")));
    let options = RequestOptions::get()
        .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
        .header("x-client".parse().unwrap(), HeaderValue::from_static("cli"));

    let payload: Value = assert_ok!(client.request("/rates/latest", options).await);
    assert_eq!(payload, json!({}));
}

#[tokio::test]
async fn test_not_found_message() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/wallet/me"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&server)
        .await;

    let err = anonymous_client(&server).wallet_me().await.unwrap_err();
    assert!(matches!(err, KantorError::Client { status: 404, .. }));
    assert_eq!(err.message(), "Not found");
}

#[tokio::test]
async fn test_empty_server_error_message() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/wallet/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = anonymous_client(&server).wallet_me().await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn test_non_json_success_passes_through() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/wallet/deposit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let payload = assert_ok!(client.deposit(100.into()).await);
    assert_eq!(payload, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_network_failure_is_network_error() {
    let server = setup_mock_server().await;
    let client = anonymous_client(&server);
    drop(server);

    let err = client.wallet_me().await.unwrap_err();
    assert!(err.is_network_error());
    assert!(err.status().is_none());
}
