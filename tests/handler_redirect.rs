mod common;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use linkshort::domain::repositories::LinkRepository;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com/a/b?c=1").await;
    let server = common::create_test_server(state);

    let response = server.get("/abc1234").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/a/b?c=1");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;
    let server = common::create_test_server(state);

    for _ in 0..3 {
        server.get("/abc1234").await.assert_status(StatusCode::FOUND);
    }

    let link = repo.find_by_code("abc1234").await.unwrap().unwrap();
    assert_eq!(link.clicks, 3);
}

#[tokio::test]
async fn test_redirect_trailing_slash() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;
    let app = linkshort::routes::app_router(state);

    let request = Request::builder()
        .uri("/abc1234/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::memory_state();
    let server = common::create_test_server(state);

    let response = server.get("/nosuch1").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_invalid_code_is_not_found() {
    let (state, _repo) = common::memory_state();
    let server = common::create_test_server(state);

    server.get("/bad-code!").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_case_sensitive() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "AbCdEfG", "https://example.com").await;
    let server = common::create_test_server(state);

    server.get("/abcdefg").await.assert_status_not_found();
    server.get("/AbCdEfG").await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let (state, repo) = common::memory_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;
    let server = common::create_test_server(state);

    server.delete("/delete/abc1234").await.assert_status_ok();
    server.get("/abc1234").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let state = common::create_test_state(Arc::new(common::FailingLinkRepository));
    let server = common::create_test_server(state);

    let response = server.get("/abc1234").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
