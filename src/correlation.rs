use axum::http::HeaderMap;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Returns the client-supplied `X-Request-ID` when present and non-empty,
/// otherwise mints a fresh id. Generation is random (UUID v4), so concurrent
/// requests never contend on shared state and ids do not collide in
/// practice.
pub fn get_or_generate(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(generate)
}

pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
