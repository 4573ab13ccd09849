//! DTOs for listing and deleting links.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response from a link and the public base URL.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url, link.code),
            code: link.code,
            url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Confirmation returned after a link is deleted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_link() {
        let link = Link::new(
            3,
            "abc1234".to_string(),
            "https://example.com".to_string(),
            5,
            Utc::now(),
        );

        let response = LinkResponse::from_link(link, "https://sho.rt");

        assert_eq!(response.short_url, "https://sho.rt/abc1234");
        assert_eq!(response.url, "https://example.com");
        assert_eq!(response.clicks, 5);

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("shortUrl").is_some());
    }
}
