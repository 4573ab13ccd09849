//! Externally visible base URL used to build short links.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// How the service decides the origin printed in front of short codes.
///
/// - `Fixed` - a configured base such as `https://sho.rt` (from `BASE_URL`,
///   or `http://localhost:<PORT>` in development)
/// - `FromRequest` - derived per request from `Host` and `X-Forwarded-Proto`,
///   used in production when no `BASE_URL` is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicUrl {
    Fixed(String),
    FromRequest,
}

impl PublicUrl {
    /// Returns the base URL (scheme + authority, no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] in `FromRequest` mode if the `Host`
    /// header is missing or not valid UTF-8.
    pub fn base(&self, headers: &HeaderMap) -> Result<String, AppError> {
        match self {
            PublicUrl::Fixed(base) => Ok(base.trim_end_matches('/').to_string()),
            PublicUrl::FromRequest => {
                let host = extract_host_from_headers(headers)?;
                let scheme = forwarded_proto(headers).unwrap_or("https");
                Ok(format!("{scheme}://{host}"))
            }
        }
    }

    /// Builds the full short URL for `code`.
    ///
    /// # Errors
    ///
    /// See [`Self::base`].
    pub fn short_url(&self, headers: &HeaderMap, code: &str) -> Result<String, AppError> {
        Ok(format!("{}/{}", self.base(headers)?, code))
    }
}

/// Extracts the `Host` header value, port included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    Ok(host.to_string())
}

/// Reads the first `X-Forwarded-Proto` value if it is `http` or `https`.
fn forwarded_proto(headers: &HeaderMap) -> Option<&'static str> {
    let value = headers.get(FORWARDED_PROTO)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();

    if first.eq_ignore_ascii_case("http") {
        Some("http")
    } else if first.eq_ignore_ascii_case("https") {
        Some("https")
    } else {
        None
    }
}
