//! Utility functions

use percent_encoding::{AsciiSet, CONTROLS};

/// Characters to escape in query parameter values
pub const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Percent-encode a query parameter value
pub fn encode_query(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, QUERY).to_string()
}

/// Extract header value as string
pub fn header_str(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers.get(name)?.to_str().ok().map(|s| s.to_string())
}

/// Generate a new request ID
pub fn generate_request_id() -> String {
    format!("sdk-{}", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("jdoe@example.com"), "jdoe@example.com");
        assert_eq!(encode_query("two words"), "two%20words");
        assert_eq!(encode_query("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query("50%"), "50%25");
    }

    #[test]
    fn test_header_str() {
        let mut headers = http::HeaderMap::new();
        let _ = headers.insert(
            "x-request-id",
            http::HeaderValue::from_static("req-abc"),
        );
        assert_eq!(header_str(&headers, "x-request-id"), Some("req-abc".to_string()));
        assert_eq!(header_str(&headers, "etag"), None);
    }

    #[test]
    fn test_generate_request_id() {
        let id = generate_request_id();
        assert!(id.starts_with("sdk-"));
        assert_ne!(id, generate_request_id());
    }
}
