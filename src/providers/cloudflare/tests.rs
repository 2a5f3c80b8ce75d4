//! Integration tests for the Cloudflare provider

use super::*;
use assert_matches::assert_matches;
use httpmock::prelude::*;

fn provider_for(server: &MockServer) -> CloudflareProvider {
    let config = CloudflareConfig {
        api_url: server.url(""),
        zone_id: "zone123".to_string(),
    };
    CloudflareProvider::new(config, "token".to_string()).unwrap()
}

#[tokio::test]
async fn test_fetch_record_matches_short_name() {
    let server = MockServer::start_async().await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/zones/zone123/dns_records")
                .header("authorization", "Bearer token");
            then.status(200).json_body_obj(&serde_json::json!({
                "success": true,
                "errors": [],
                "result": [
                    { "id": "def", "name": "vpn.example.com", "content": "203.0.113.2" },
                    { "id": "abc", "name": "home.example.com", "content": "203.0.113.1" }
                ]
            }));
        })
        .await;

    let provider = provider_for(&server);
    let record = provider.fetch_record("home").await.unwrap();
    assert_eq!(record.id, "abc");
    assert_eq!(record.name, "home.example.com");
    assert_eq!(record.content, "203.0.113.1");
    list_mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_record_first_match_wins() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/zones/zone123/dns_records");
            then.status(200).json_body_obj(&serde_json::json!({
                "success": true,
                "errors": [],
                "result": [
                    { "id": "abc", "name": "home.example.com", "content": "203.0.113.1" },
                    { "id": "def", "name": "home.internal.example.com", "content": "203.0.113.2" }
                ]
            }));
        })
        .await;

    let provider = provider_for(&server);
    let record = provider.fetch_record("home").await.unwrap();
    assert_eq!(record.id, "abc");
}

#[tokio::test]
async fn test_fetch_record_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/zones/zone123/dns_records");
            then.status(200).json_body_obj(&serde_json::json!({
                "success": true,
                "errors": [],
                "result": []
            }));
        })
        .await;

    let provider = provider_for(&server);
    let err = provider.fetch_record("home").await.unwrap_err();
    assert_matches!(err, Error::NotFound(_));
}

#[tokio::test]
async fn test_fetch_record_api_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/zones/zone123/dns_records");
            then.status(403).json_body_obj(&serde_json::json!({
                "success": false,
                "errors": [ { "code": 10000, "message": "Authentication error" } ],
                "result": null
            }));
        })
        .await;

    let provider = provider_for(&server);
    let err = provider.fetch_record("home").await.unwrap_err();
    assert_matches!(err, Error::Transport(_));
}

#[tokio::test]
async fn test_update_record_sends_full_replacement() {
    let server = MockServer::start_async().await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/zones/zone123/dns_records/abc")
                .header("authorization", "Bearer token")
                .json_body(serde_json::json!({
                    "type": "A",
                    "name": "home",
                    "content": "203.0.113.5",
                    "ttl": 1,
                    "proxied": false
                }));
            then.status(200).json_body_obj(&serde_json::json!({
                "success": true,
                "errors": [],
                "result": { "id": "abc", "name": "home.example.com", "content": "203.0.113.5" }
            }));
        })
        .await;

    let provider = provider_for(&server);
    provider
        .update_record("abc", "home", "203.0.113.5".parse().unwrap())
        .await
        .unwrap();
    put_mock.assert_async().await;
}

#[tokio::test]
async fn test_update_record_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/zones/zone123/dns_records/abc");
            then.status(500);
        })
        .await;

    let provider = provider_for(&server);
    let err = provider
        .update_record("abc", "home", "203.0.113.5".parse().unwrap())
        .await
        .unwrap_err();
    assert_matches!(err, Error::Transport(_));
}
