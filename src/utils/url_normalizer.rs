//! URL parsing and normalization.
//!
//! The normalized form is the WHATWG serialization produced by the `url` crate: scheme
//! and host lowercased, default ports dropped, dot segments resolved, an empty path
//! replaced by `/`. Query and fragment are preserved as submitted.
//!
//! Length is measured in bytes of the normalized form, which is what gets stored and
//! indexed. Percent-encoding can make it several times longer than the input.

use url::Url;

/// Longest accepted normalized URL, in bytes.
///
/// Keeps the `original_url` unique index entry under PostgreSQL's btree row limit.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("normalized URL exceeds {max} bytes", max = MAX_URL_LENGTH)]
    TooLong,
}

/// Parses `input` as an absolute URL and returns its normalized form.
///
/// # Security
///
/// Rejects non-HTTP(S) schemes such as `javascript:`, `data:` and `file:`.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::MissingHost`] if the URL has no authority.
/// Returns [`UrlNormalizationError::TooLong`] if the normalized form is longer than
/// [`MAX_URL_LENGTH`] bytes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap().as_str(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    if url.as_str().len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Host;

    fn normalized(input: &str) -> String {
        normalize_url(input).unwrap().to_string()
    }

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(normalized("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_normalize_keeps_canonical_input() {
        assert_eq!(
            normalized("https://example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_uppercase_host_and_scheme() {
        assert_eq!(
            normalized("HTTPS://EXAMPLE.COM/Path"),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_remove_default_ports() {
        assert_eq!(
            normalized("http://example.com:80/path"),
            "http://example.com/path"
        );
        assert_eq!(
            normalized("https://example.com:443/path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_normalize_keep_custom_port() {
        assert_eq!(
            normalized("http://example.com:8080/path"),
            "http://example.com:8080/path"
        );
    }

    #[test]
    fn test_normalize_preserves_query_and_fragment() {
        assert_eq!(
            normalized("https://example.com/page?key=VALUE#section"),
            "https://example.com/page?key=VALUE#section"
        );
    }

    #[test]
    fn test_normalize_resolves_dot_segments() {
        assert_eq!(
            normalized("https://example.com/a/./b/../c"),
            "https://example.com/a/c"
        );
    }

    #[test]
    fn test_normalize_unicode_domain_to_punycode() {
        let url = normalized("https://münchen.de");
        assert!(url.starts_with("https://xn--"), "got {url}");
    }

    #[test]
    fn test_normalize_ip_hosts() {
        let v4 = normalize_url("http://192.168.1.1:8080/api").unwrap();
        assert!(matches!(v4.host(), Some(Host::Ipv4(_))));

        let v6 = normalize_url("http://[::1]:3000/").unwrap();
        assert!(matches!(v6.host(), Some(Host::Ipv6(_))));
    }

    #[test]
    fn test_normalize_invalid_url() {
        assert!(matches!(
            normalize_url("not-a-url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_url("not a valid url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(matches!(
            normalize_url(""),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_no_protocol() {
        assert!(matches!(
            normalize_url("example.com"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_empty_host() {
        assert!(normalize_url("http://").is_err());
    }

    #[test]
    fn test_normalize_rejects_other_protocols() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///home/user/document.txt",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    normalize_url(input),
                    Err(UrlNormalizationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            normalize_url(&url),
            Err(UrlNormalizationError::TooLong)
        ));
    }

    #[test]
    fn test_normalize_limit_is_inclusive() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));

        assert_eq!(normalized(&url).len(), MAX_URL_LENGTH);
    }

    #[test]
    fn test_normalize_length_counts_percent_encoded_bytes() {
        // 2040 bytes of input; each two-byte character encodes to six.
        let url = format!("https://example.com/{}", "\u{07ff}".repeat(1010));
        assert!(url.len() <= MAX_URL_LENGTH);

        assert!(matches!(
            normalize_url(&url),
            Err(UrlNormalizationError::TooLong)
        ));
    }

    #[test]
    fn test_normalize_short_non_ascii_path_is_accepted() {
        let url = normalized(&format!("https://example.com/{}", "é".repeat(300)));

        assert!(url.len() <= MAX_URL_LENGTH);
        assert!(url.starts_with("https://example.com/%C3%A9"));
    }

    #[test]
    fn test_normalize_encoded_characters() {
        assert!(
            normalized("https://example.com/path%20with%20spaces").contains("path%20with%20spaces")
        );
    }
}
