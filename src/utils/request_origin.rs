//! Public origin extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Builds the public origin (`scheme://host[:port]`) a request was sent to.
///
/// The host comes from the `Host` header, port included. The scheme comes
/// from `X-Forwarded-Proto` when a proxy sets it and is `http` otherwise.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing, empty, or
/// not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(request_origin(&headers).unwrap(), "http://sho.rt:8080");
/// ```
pub fn request_origin(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Invalid Host header", json!({})));
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("https") || v.eq_ignore_ascii_case("http"))
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_origin_plain_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));

        assert_eq!(request_origin(&headers).unwrap(), "http://sho.rt");
    }

    #[test]
    fn test_origin_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(request_origin(&headers).unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_origin_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        assert_eq!(request_origin(&headers).unwrap(), "https://sho.rt");
    }

    #[test]
    fn test_origin_forwarded_proto_list_takes_first() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("HTTPS, http"));

        assert_eq!(request_origin(&headers).unwrap(), "https://sho.rt");
    }

    #[test]
    fn test_origin_ignores_unknown_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("gopher"));

        assert_eq!(request_origin(&headers).unwrap(), "http://sho.rt");
    }

    #[test]
    fn test_origin_missing_host() {
        let headers = HeaderMap::new();
        assert!(request_origin(&headers).is_err());
    }

    #[test]
    fn test_origin_ipv6_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:3000"));

        assert_eq!(request_origin(&headers).unwrap(), "http://[::1]:3000");
    }
}
