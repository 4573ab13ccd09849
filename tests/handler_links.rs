mod common;

use axum::http::{HeaderValue, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_list_links_json() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "first01", "https://1.example").await;
    common::create_test_link(&repo, "second1", "https://2.example").await;
    let server = common::create_test_server(state);

    let response = server
        .get("/")
        .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["code"], "second1");
    assert_eq!(links[0]["url"], "https://2.example");
    assert_eq!(links[0]["shortUrl"], "http://sho.rt/second1");
    assert_eq!(links[0]["clicks"], 0);
    assert!(links[0]["createdAt"].is_string());
    assert_eq!(links[1]["code"], "first01");
}

#[tokio::test]
async fn test_list_links_empty() {
    let (state, _repo) = common::memory_state();
    let server = common::create_test_server(state);

    let response = server
        .get("/")
        .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_index_html() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com/page").await;
    let server = common::create_test_server(state);

    let response = server
        .get("/")
        .add_header(header::ACCEPT, HeaderValue::from_static("text/html"))
        .await;

    response.assert_status_ok();

    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("name=\"fullUrl\""));
    assert!(html.contains("https://example.com/page"));
    assert!(html.contains("http://sho.rt/abc1234"));
}

#[tokio::test]
async fn test_index_shows_click_counts() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;
    let server = common::create_test_server(state);

    server.get("/abc1234").await.assert_status(StatusCode::FOUND);
    server.get("/abc1234").await.assert_status(StatusCode::FOUND);

    let body = server
        .get("/")
        .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
        .await
        .json::<Value>();
    assert_eq!(body[0]["clicks"], 2);
}

#[tokio::test]
async fn test_delete_link_success() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;
    let server = common::create_test_server(state);

    let response = server.delete("/delete/abc1234").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Short URL deleted successfully");
    assert_eq!(body["shortUrl"], "abc1234");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (state, _repo) = common::memory_state();
    let server = common::create_test_server(state);

    let response = server.delete("/delete/nosuch1").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_link_twice() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;
    let server = common::create_test_server(state);

    server.delete("/delete/abc1234").await.assert_status_ok();
    server.delete("/delete/abc1234").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_only_removes_target() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "keep123", "https://keep.example").await;
    common::create_test_link(&repo, "drop123", "https://drop.example").await;
    let server = common::create_test_server(state);

    server.delete("/delete/drop123").await.assert_status_ok();

    assert_eq!(repo.len(), 1);
    server.get("/keep123").await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_list_store_unavailable() {
    let state = common::create_test_state(Arc::new(common::FailingLinkRepository));
    let server = common::create_test_server(state);

    let response = server
        .get("/")
        .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
