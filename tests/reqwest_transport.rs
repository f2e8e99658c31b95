#![cfg(feature = "http-client-reqwest-0_12")]

use std::time::Duration;

use awaitable_rest::{CancellationToken, JSON_CONTENT_TYPE, Outcome, RestClient};
use httpmock::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Ack {
    ok: bool,
}

fn client() -> RestClient<reqwest::Client> {
    RestClient::builder()
        .http_client(reqwest::Client::new())
        .build()
}

#[tokio::test]
async fn test_get_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/status");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"ok":true}"#);
        })
        .await;

    let response = client().get(server.url("/status")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.outcome(), Outcome::Success);
    assert_eq!(response.text(), Some(r#"{"ok":true}"#));
    assert!(response.error_message().is_none());
    assert_eq!(
        response.headers().unwrap()["content-type"],
        "application/json"
    );
    assert!(response.json::<Ack>().unwrap().ok);
}

#[tokio::test]
async fn test_not_found_is_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).body("not found");
        })
        .await;

    let response = client().get(server.url("/missing")).await.unwrap();

    assert_eq!(response.status_code(), 404);
    assert!(!response.is_success());
    assert!(!response.is_network_error());
    assert!(response.has_body());
    assert_eq!(response.text(), Some("not found"));
    assert_eq!(response.error_message(), Some("HTTP/1.1 404 Not Found"));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/items")
                .header("content-type", JSON_CONTENT_TYPE)
                .body(r#"{"name":"widget"}"#);
            then.status(201).body(r#"{"id":7}"#);
        })
        .await;

    let response = client()
        .post(server.url("/items"), r#"{"name":"widget"}"#)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code(), 201);
    assert!(response.is_success());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let response = client()
        .get(format!("http://127.0.0.1:{port}/"))
        .await
        .unwrap();

    assert_eq!(response.status_code(), 0);
    assert!(response.is_network_error());
    assert!(!response.is_success());
    assert!(response.text().is_none());
    assert!(response.headers().is_none());
    assert!(response.error_message().is_some());
}

#[tokio::test]
async fn test_transport_timeout_is_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_secs(5));
        })
        .await;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = RestClient::builder().http_client(http_client).build();

    let response = client.get(server.url("/slow")).await.unwrap();

    assert!(response.is_network_error());
    assert!(
        response
            .error_message()
            .unwrap()
            .starts_with("Request aborted")
    );
}

#[tokio::test]
async fn test_cancel_before_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_secs(5));
        })
        .await;

    let token = CancellationToken::new();
    let canceller = tokio::spawn({
        let token = token.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            token.cancel();
        }
    });

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        client().get_with_cancellation(server.url("/slow"), &token),
    )
    .await
    .expect("cancellation should abort the request promptly");

    canceller.await.unwrap();
    let err = result.unwrap_err();
    assert!(err.token().is_cancelled());
    assert_eq!(err.url().path(), "/slow");
}
