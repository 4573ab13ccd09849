//! Link creation, resolution and removal service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, is_valid_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Maximum number of inserts attempted per shorten request before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating, resolving and deleting short links.
///
/// Holds no mutable state of its own; every operation round-trips to the
/// injected [`LinkRepository`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    code_length: usize,
}

impl LinkService {
    /// Creates a new link service generating codes of [`DEFAULT_CODE_LENGTH`].
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_repository,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Overrides the length of generated codes.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Creates a short link for `long_url`.
    ///
    /// The URL is stored exactly as given. Uniqueness of the code is enforced
    /// by the store: the insert itself is the existence check, and a conflict
    /// triggers a fresh code. At most [`MAX_CODE_ATTEMPTS`] inserts are tried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an absolute
    /// HTTP(S) URL.
    /// Returns [`AppError::StorageExhausted`] if every attempt collided.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn shorten(&self, long_url: String) -> Result<Link, AppError> {
        validate_url(&long_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "field": "fullUrl" }))
        })?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(self.code_length),
                long_url: long_url.clone(),
            };
            let code = new_link.code.clone();

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(code = %link.code, attempt, "short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(code = %code, attempt, "short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_CODE_ATTEMPTS,
            code_length = self.code_length,
            "giving up on short code generation"
        );

        Err(AppError::storage_exhausted(
            "Failed to generate unique code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a code to its original URL, counting one click.
    ///
    /// The increment happens in the same store operation as the lookup, so
    /// concurrent resolutions never lose a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        let link = self
            .link_repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        tracing::debug!(code = %link.code, clicks = link.clicks, "short link resolved");

        Ok(link.long_url)
    }

    /// Retrieves a link by code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Lists all links, newest first.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Permanently removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code; nothing is
    /// modified in that case.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        if !self.link_repository.delete(code).await? {
            return Err(not_found(code));
        }

        tracing::info!(code = %code, "short link deleted");

        Ok(())
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
