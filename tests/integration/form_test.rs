use super::common;

use common::test_server::TestServer;
use reqwest::multipart::{Form, Part};
use serde_json::json;

fn base_form() -> Form {
    Form::new()
        .text("token", "vivalldi")
        .text("another", "mause")
        .part(
            "data",
            Part::bytes(vec![0x07])
                .file_name("data")
                .mime_str("text/csv")
                .unwrap(),
        )
}

#[tokio::test]
async fn test_post_without_opts() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/test"))
        .multipart(base_form())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"token": "vivalldi", "opts": {}}));
}

#[tokio::test]
async fn test_post_with_json_opts() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let opts = Part::text(json!({"a": 2}).to_string())
        .mime_str("application/json")
        .unwrap();

    let response = client
        .post(server.url("/test"))
        .multipart(base_form().part("opts", opts))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"token": "vivalldi", "opts": {"a": 2}}));
}

#[tokio::test]
async fn test_post_without_token() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/test"))
        .multipart(Form::new())
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"][0]["field"], "token");
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..8i64 {
        let client = client.clone();
        let url = server.url("/test");
        handles.push(tokio::spawn(async move {
            let form = Form::new()
                .text("token", format!("token-{}", i))
                .text("opts", json!({ "n": i }).to_string());
            let response = client.post(url).multipart(form).send().await.unwrap();
            let body: serde_json::Value = response.json().await.unwrap();
            (i, body)
        }));
    }

    for handle in handles {
        let (i, body) = handle.await.unwrap();
        assert_eq!(body, json!({"token": format!("token-{}", i), "opts": {"n": i}}));
    }
}
