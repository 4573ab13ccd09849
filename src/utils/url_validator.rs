//! Target URL validation.
//!
//! URLs are checked but never rewritten: the stored value is exactly what
//! the client submitted, so a redirect returns it byte-for-byte.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacters,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and other schemes that would turn
/// the redirect endpoint into an injection vector.
///
/// Control characters are rejected before parsing: `Url::parse` silently
/// strips tabs and newlines, but the stored string must still be a valid
/// `Location` header value.
///
/// # Errors
///
/// See [`UrlValidationError`].
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.bytes().any(|b| b.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/a/b?c=1").is_ok());
    }

    #[test]
    fn test_accepts_ports_queries_and_fragments() {
        assert!(validate_url("https://example.com:8443/path?q=1&r=2#top").is_ok());
        assert!(validate_url("http://127.0.0.1:5000/").is_ok());
        assert!(validate_url("http://[::1]/").is_ok());
    }

    #[test]
    fn test_accepts_unicode_path() {
        assert!(validate_url("https://example.com/путь").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_url("data:text/html,hello"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(validate_url("https://").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://exa\nmple.com/a",
            "https://example.com/a\r\nSet-Cookie: x=1",
            "https://example.com/\tpath",
            "https://example.com/\u{7f}",
            "https://example.com/\0",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::ControlCharacters),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UrlValidationError::UnsupportedProtocol.to_string(),
            "Only HTTP and HTTPS protocols are allowed"
        );
        assert_eq!(UrlValidationError::Empty.to_string(), "URL must not be empty");
    }
}
