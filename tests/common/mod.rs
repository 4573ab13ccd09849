#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use linkshort::application::services::LinkService;
use linkshort::config::Environment;
use linkshort::domain::entities::{Link, NewLink};
use linkshort::domain::repositories::LinkRepository;
use linkshort::error::AppError;
use linkshort::infrastructure::persistence::MemoryLinkRepository;
use linkshort::routes;
use linkshort::state::AppState;
use linkshort::utils::public_url::PublicUrl;
use serde_json::json;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

fn unavailable() -> AppError {
    AppError::store_unavailable("Storage is unavailable", json!({}))
}

/// Repository whose every call fails as if the database were down.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn create_test_state(repo: Arc<dyn LinkRepository>) -> AppState {
    let link_service = Arc::new(LinkService::new(repo));

    AppState::new(
        link_service,
        PublicUrl::Fixed(BASE_URL.to_string()),
        Environment::Development,
    )
}

pub fn memory_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    (create_test_state(repo.clone()), repo)
}

pub fn create_test_app(state: AppState) -> Router {
    routes::router(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
    })
    .await
    .unwrap()
}
