use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::ApiError;

/// Pull the bearer token out of the Authorization header.
///
/// Missing and malformed headers are reported identically; the client only
/// learns that no usable token was supplied.
pub fn require_bearer(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("No token"))?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next().unwrap_or("");
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(ApiError::unauthorized("No token"));
    }

    let token = parts.next().unwrap_or("");
    if token.is_empty() {
        return Err(ApiError::unauthorized("No token"));
    }

    Ok(token.to_string())
}
