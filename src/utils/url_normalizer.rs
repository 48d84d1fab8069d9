//! URL normalization.
//!
//! Incoming URLs are normalized before storage so that deduplication matches
//! equivalent spellings of the same address.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Normalizes a URL to a canonical form.
///
/// Rules:
///
/// 1. Only `http` and `https` schemes are accepted. This also rejects
///    dangerous schemes like `javascript:` and `data:`.
/// 2. The hostname is lowercased.
/// 3. Default ports (80 for HTTP, 443 for HTTPS) are stripped.
/// 4. The fragment is removed.
/// 5. Path and query are preserved as-is.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs and
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase))
            .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port && url.set_port(None).is_err() {
        return Err(UrlNormalizationError::InvalidFormat(
            "cannot strip default port".to_string(),
        ));
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_strips_default_ports() {
        assert_eq!(
            normalize_url("https://example.com:443/path").unwrap(),
            "https://example.com/path"
        );
        assert_eq!(
            normalize_url("http://example.com:80/").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_keeps_explicit_ports() {
        assert_eq!(
            normalize_url("http://example.com:8080/").unwrap(),
            "http://example.com:8080/"
        );
    }

    #[test]
    fn test_removes_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_preserves_query() {
        assert_eq!(
            normalize_url("https://example.com/search?q=Rust&page=2").unwrap(),
            "https://example.com/search?q=Rust&page=2"
        );
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(matches!(
            normalize_url("not a url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in ["javascript:alert(1)", "data:text/plain,hi", "ftp://x.com"] {
            assert!(matches!(
                normalize_url(input),
                Err(UrlNormalizationError::UnsupportedProtocol)
            ));
        }
    }
}
