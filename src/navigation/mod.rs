//! URL bar input normalization
//!
//! Converts free-text user input into a destination the engine can load.
//! No hostname validation happens here; malformed input is forwarded to the
//! engine, which owns error reporting for unreachable destinations.

/// Default scheme prepended to scheme-less input
pub const DEFAULT_SCHEME: &str = "http://";

/// Neutral page used when navigation is refused
pub const BLANK_PAGE: &str = "about:blank";

/// Scheme prefixes passed through untouched
const KNOWN_SCHEMES: [&str; 4] = ["http://", "https://", "file://", "about:"];

/// Normalize raw URL bar input into a scheme-qualified destination
///
/// Input that already carries a recognized scheme is returned unchanged;
/// anything else gets the default scheme prepended. Never fails.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if KNOWN_SCHEMES.iter().any(|s| trimmed.starts_with(s)) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    }
}

/// Extract the hostname from a destination, if it has one
///
/// Returns `None` for unparseable input and host-less schemes such as
/// `about:blank`.
pub fn host_of(destination: &str) -> Option<String> {
    url::Url::parse(destination)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_default_scheme() {
        assert_eq!(normalize("example.com"), "http://example.com");
        assert_eq!(normalize("openai.com/research"), "http://openai.com/research");
    }

    #[test]
    fn test_normalize_passes_schemes_through() {
        assert_eq!(normalize("http://example.com"), "http://example.com");
        assert_eq!(normalize("https://example.com"), "https://example.com");
        assert_eq!(normalize("file:///tmp/index.html"), "file:///tmp/index.html");
        assert_eq!(normalize("about:blank"), "about:blank");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  example.com "), "http://example.com");
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("http://example.com/a/b"), Some("example.com".to_string()));
        assert_eq!(host_of("https://sub.example.com"), Some("sub.example.com".to_string()));
        assert_eq!(host_of("about:blank"), None);
        assert_eq!(host_of("not a url"), None);
    }
}
