use crate::correlation::REQUEST_ID_HEADER;
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Upstream dependency involved in a failure, used to pick the error code
/// and message in the 502 envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Salary,
    Credit,
}

impl Dependency {
    pub fn error_code(&self) -> &'static str {
        match self {
            Dependency::Salary => "salary_service_unavailable",
            Dependency::Credit => "credit_service_unavailable",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Dependency::Salary => "Failed to verify salary",
            Dependency::Credit => "Failed to verify credit",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::Salary => write!(f, "salary"),
            Dependency::Credit => write!(f, "credit"),
        }
    }
}

/// Application-specific error types.
///
/// Every variant carries the request id so error responses still echo
/// `X-Request-ID`. Infrastructure failures use a distinct envelope and
/// status so callers can tell "declined" from "could not complete the
/// check" — upstream unavailability is never shaped as a decline.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Malformed body or invalid field values. No upstream call was made.
    InvalidRequest { message: String, request_id: String },
    /// Required upstream base URLs are not configured.
    ConfigError { message: String, request_id: String },
    /// Upstream dependency stayed unavailable after the retry budget.
    UpstreamUnavailable {
        dependency: Dependency,
        detail: String,
        request_id: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRequest { message, .. } => write!(f, "Invalid request: {}", message),
            AppError::ConfigError { message, .. } => write!(f, "Config error: {}", message),
            AppError::UpstreamUnavailable {
                dependency, detail, ..
            } => write!(f, "{} service unavailable: {}", dependency, detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, request_id, body) = match &self {
            AppError::InvalidRequest {
                message,
                request_id,
            } => {
                tracing::warn!(request_id = %request_id, "invalid request: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    request_id.clone(),
                    json!({
                        "error": "invalid_request",
                        "message": message,
                        "request_id": request_id,
                    }),
                )
            }
            AppError::ConfigError {
                message,
                request_id,
            } => {
                tracing::error!(request_id = %request_id, "config error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    request_id.clone(),
                    json!({
                        "error": "config_error",
                        "message": message,
                        "request_id": request_id,
                    }),
                )
            }
            AppError::UpstreamUnavailable {
                dependency,
                detail,
                request_id,
            } => {
                tracing::error!(
                    request_id = %request_id,
                    dependency = %dependency,
                    "upstream unavailable: {}",
                    detail
                );
                (
                    StatusCode::BAD_GATEWAY,
                    request_id.clone(),
                    json!({
                        "error": dependency.error_code(),
                        "message": dependency.failure_message(),
                        "detail": detail,
                        "request_id": request_id,
                    }),
                )
            }
        };

        let mut response = (status, Json(body)).into_response();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
}
