//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Environment;
use crate::utils::public_url::PublicUrl;

/// Application state cloned into each request.
///
/// Holds only handles: the service owns an `Arc` to the repository, which owns
/// the process-wide connection pool.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub public_url: PublicUrl,
    pub environment: Environment,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        public_url: PublicUrl,
        environment: Environment,
    ) -> Self {
        Self {
            link_service,
            public_url,
            environment,
        }
    }
}
