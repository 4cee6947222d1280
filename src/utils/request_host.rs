//! Short-URL construction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Forwarded-protocol header set by reverse proxies.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the absolute short URL for an alias from the request headers.
///
/// The host comes from the `Host` header, falling back to `default_host`
/// when it is missing or not valid UTF-8. The scheme comes from
/// `X-Forwarded-Proto`, falling back to plain `http` when no proxy set it.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt".parse().unwrap());
///
/// let url = build_short_url(&headers, "localhost:3000", "abc123");
/// assert_eq!(url, "http://sho.rt/resolve-short-url/abc123");
/// ```
pub fn build_short_url(headers: &HeaderMap, default_host: &str, alias: &str) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(default_host);

    let protocol = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    format!("{protocol}://{host}/resolve-short-url/{alias}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_host_header_used() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));

        let url = build_short_url(&headers, "localhost:3000", "abc");
        assert_eq!(url, "http://sho.rt/resolve-short-url/abc");
    }

    #[test]
    fn test_missing_host_falls_back_to_default() {
        let headers = HeaderMap::new();

        let url = build_short_url(&headers, "localhost:3000", "abc");
        assert_eq!(url, "http://localhost:3000/resolve-short-url/abc");
    }

    #[test]
    fn test_forwarded_proto_used() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));

        let url = build_short_url(&headers, "localhost:3000", "abc");
        assert_eq!(url, "https://sho.rt/resolve-short-url/abc");
    }

    #[test]
    fn test_host_with_port_kept_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt:8080"));

        let url = build_short_url(&headers, "localhost:3000", "abc");
        assert_eq!(url, "http://sho.rt:8080/resolve-short-url/abc");
    }
}
