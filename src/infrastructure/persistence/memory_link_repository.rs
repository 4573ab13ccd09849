//! In-process link repository.
//!
//! Backs integration tests and local experiments without a database. All
//! operations take one mutex, which serializes updates to the same record the
//! way a row lock does in PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct State {
    links: HashMap<String, Link>,
    next_id: i64,
}

/// Link repository keeping records in a `HashMap` keyed by code.
#[derive(Default)]
pub struct MemoryLinkRepository {
    state: Mutex<State>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock cannot leave a half-written Link behind.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut state = self.lock();

        if state.links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        state.next_id += 1;
        let link = Link::new(
            state.next_id,
            new_link.code,
            new_link.long_url,
            0,
            Utc::now(),
        );
        state.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.lock().links.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut state = self.lock();

        Ok(state.links.get_mut(code).map(|link| {
            link.clicks += 1;
            link.clone()
        }))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.lock().links.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.lock().links.remove(code).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryLinkRepository::new();

        let link = repo
            .create(new_link("abc1234", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(link.clicks, 0);

        let found = repo.find_by_code("abc1234").await.unwrap();
        assert_eq!(found, Some(link));
    }

    #[tokio::test]
    async fn test_create_duplicate_code_conflicts() {
        let repo = MemoryLinkRepository::new();

        repo.create(new_link("abc1234", "https://a.example"))
            .await
            .unwrap();
        let result = repo.create(new_link("abc1234", "https://b.example")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_increment_clicks() {
        let repo = MemoryLinkRepository::new();
        repo.create(new_link("abc1234", "https://example.com"))
            .await
            .unwrap();

        let first = repo.increment_clicks("abc1234").await.unwrap().unwrap();
        let second = repo.increment_clicks("abc1234").await.unwrap().unwrap();

        assert_eq!(first.clicks, 1);
        assert_eq!(second.clicks, 2);
        assert!(repo.increment_clicks("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = MemoryLinkRepository::new();
        repo.create(new_link("first01", "https://1.example"))
            .await
            .unwrap();
        repo.create(new_link("second1", "https://2.example"))
            .await
            .unwrap();

        let links = repo.list().await.unwrap();
        let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();

        assert_eq!(codes, vec!["second1", "first01"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryLinkRepository::new();
        repo.create(new_link("abc1234", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.delete("abc1234").await.unwrap());
        assert!(!repo.delete("abc1234").await.unwrap());
        assert!(repo.is_empty());
    }
}
