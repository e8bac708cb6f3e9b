//! Client address extraction
//!
//! The service normally sits behind a reverse proxy, so the requester
//! address comes from forwarding headers. Precedence: X-Forwarded-For
//! (first entry), then X-Real-IP, then nothing. A missing address is a
//! valid outcome and never fails the request.

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

/// Extract the forwarded client IP from a HeaderMap
pub fn extract_forwarded_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
}

/// Extract the forwarded client IP from an HttpRequest
pub fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    extract_forwarded_ip_from_headers(req.headers())
}
