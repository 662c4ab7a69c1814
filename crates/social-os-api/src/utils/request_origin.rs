//! Externally visible origin of an inbound request
//!
//! Used to build public image URLs when no `PUBLIC_BASE_URL` is configured.
//! Honors `X-Forwarded-Proto` / `X-Forwarded-Host` so that URLs stay correct
//! behind a reverse proxy or tunnel.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use std::convert::Infallible;

const DEFAULT_SCHEME: &str = "http";
const DEFAULT_HOST: &str = "localhost";

/// `scheme://host[:port]` of the current request, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

/// First value of a possibly comma-separated forwarding header.
fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub fn request_origin(parts: &Parts) -> String {
    let headers = &parts.headers;

    let scheme = first_header_value(headers, "x-forwarded-proto")
        .filter(|s| s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
        .map(str::to_lowercase)
        .or_else(|| parts.uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_SCHEME.to_string());

    let host = first_header_value(headers, "x-forwarded-host")
        .or_else(|| first_header_value(headers, header::HOST.as_str()))
        .or_else(|| parts.uri.authority().map(|a| a.as_str()))
        .unwrap_or(DEFAULT_HOST);

    format!("{}://{}", scheme, host.trim_end_matches('/'))
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestOrigin(request_origin(parts)))
    }
}
