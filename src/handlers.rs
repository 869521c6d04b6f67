use crate::config::Config;
use crate::correlation::{self, REQUEST_ID_HEADER};
use crate::decision;
use crate::errors::{AppError, Dependency};
use crate::finance;
use crate::models::{DecisionStatus, LoanApplication, LoanDecision, SalaryRecord};
use crate::upstream::{UpstreamClient, UpstreamError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

pub const REASON_SALARY_NOT_FOUND: &str = "Salary record not found";
pub const REASON_CREDIT_NOT_FOUND: &str = "Credit record not found";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Upstream client, absent when the dependency URLs are not configured.
    /// Requests then fail per-request with a config error.
    pub upstream: Option<UpstreamClient>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let upstream = match (&config.salary_api_url, &config.credit_api_url) {
            (Some(salary), Some(credit)) => {
                Some(UpstreamClient::new(salary.clone(), credit.clone())?)
            }
            _ => None,
        };
        Ok(Self { config, upstream })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/apply-loan", post(apply_loan))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Liveness probe. No dependency checks, always 200.
pub async fn healthz() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// POST /apply-loan
///
/// Orchestrates the full evaluation: validate, verify salary, check credit,
/// decide. The two upstream calls are strictly sequential; a salary failure
/// never triggers a credit call. A not-found from either dependency is a
/// business decline carrying exactly the facts resolved up to that point,
/// while exhausted retries surface as a 502 with no decision rendered.
pub async fn apply_loan(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<LoanApplication>, JsonRejection>,
) -> Response {
    let request_id = correlation::get_or_generate(&headers);

    let application = match payload {
        Ok(Json(application)) => application,
        Err(rejection) => {
            return AppError::InvalidRequest {
                message: format!("invalid request body: {}", rejection.body_text()),
                request_id,
            }
            .into_response();
        }
    };
    if let Err(message) = application.validate() {
        return AppError::InvalidRequest {
            message,
            request_id,
        }
        .into_response();
    }

    let Some(upstream) = state.upstream.as_ref() else {
        return AppError::ConfigError {
            message: "Service URLs not configured".to_string(),
            request_id,
        }
        .into_response();
    };

    let annual_rate = state.config.annual_interest_percent;

    tracing::info!(
        request_id = %request_id,
        national_id = %application.national_id,
        "verifying salary"
    );
    let salary = match upstream
        .verify_salary(&application.national_id, &request_id)
        .await
    {
        Ok(salary) => salary,
        Err(UpstreamError::NotFound) => {
            return partial_decline(
                &request_id,
                application,
                annual_rate,
                REASON_SALARY_NOT_FOUND,
                None,
            );
        }
        Err(UpstreamError::Unavailable(detail)) => {
            return AppError::UpstreamUnavailable {
                dependency: Dependency::Salary,
                detail,
                request_id,
            }
            .into_response();
        }
    };

    tracing::info!(
        request_id = %request_id,
        national_id = %application.national_id,
        "checking credit"
    );
    let credit = match upstream
        .check_credit(&application.national_id, &request_id)
        .await
    {
        Ok(credit) => credit,
        Err(UpstreamError::NotFound) => {
            return partial_decline(
                &request_id,
                application,
                annual_rate,
                REASON_CREDIT_NOT_FOUND,
                Some(salary),
            );
        }
        Err(UpstreamError::Unavailable(detail)) => {
            return AppError::UpstreamUnavailable {
                dependency: Dependency::Credit,
                detail,
                request_id,
            }
            .into_response();
        }
    };

    let monthly_payment =
        finance::monthly_payment(application.loan_amount, application.term_months, annual_rate);
    let decision = decision::evaluate(&salary, &credit, monthly_payment);

    match decision.status {
        DecisionStatus::Approved => {
            tracing::info!(
                request_id = %request_id,
                national_id = %application.national_id,
                monthly_payment,
                "application approved"
            );
        }
        DecisionStatus::Declined => {
            tracing::info!(
                request_id = %request_id,
                national_id = %application.national_id,
                monthly_payment,
                reasons = ?decision.reasons,
                "application declined"
            );
        }
    }

    let body = LoanDecision {
        status: decision.status,
        reason: decision.primary_reason().map(str::to_string),
        reasons: if decision.reasons.is_empty() {
            None
        } else {
            Some(decision.reasons)
        },
        monthly_payment,
        annual_interest_percent: annual_rate,
        salary: Some(salary),
        credit: Some(credit),
        application,
    };
    respond(&request_id, body)
}

/// Decline produced because an upstream authoritatively reported no record.
/// The payment is still computed from the application alone and only the
/// facts resolved before the failure are echoed.
fn partial_decline(
    request_id: &str,
    application: LoanApplication,
    annual_rate: f64,
    reason: &str,
    salary: Option<SalaryRecord>,
) -> Response {
    tracing::info!(
        request_id = %request_id,
        national_id = %application.national_id,
        reason,
        "application declined on missing upstream record"
    );
    let monthly_payment =
        finance::monthly_payment(application.loan_amount, application.term_months, annual_rate);
    let body = LoanDecision {
        status: DecisionStatus::Declined,
        reason: Some(reason.to_string()),
        reasons: Some(vec![reason.to_string()]),
        monthly_payment,
        annual_interest_percent: annual_rate,
        salary,
        credit: None,
        application,
    };
    respond(request_id, body)
}

fn respond(request_id: &str, body: LoanDecision) -> Response {
    let mut response = (StatusCode::OK, Json(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
