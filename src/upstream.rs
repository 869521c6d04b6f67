use crate::models::{CreditReport, SalaryRecord};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::future::Future;
use std::time::Duration;

/// Total attempts per upstream call, counting the first one.
pub const RETRY_ATTEMPTS: u32 = 3;
/// Fixed delay between attempts, non-exponential.
pub const RETRY_DELAY: Duration = Duration::from_millis(250);
const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Three-way classification of an upstream call.
///
/// `NotFound` is an authoritative business answer (the identity has no
/// record) and is never retried. `Unavailable` covers connect errors,
/// timeouts, unexpected statuses and malformed bodies, and is transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    NotFound,
    Unavailable(String),
}

/// Client for the salary verification and credit bureau services.
///
/// Holds one shared connection pool with a per-attempt timeout; everything
/// else is per-call. Base URLs are fixed at construction so tests can point
/// the client at substitutable fakes.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    salary_base_url: String,
    credit_base_url: String,
}

impl UpstreamClient {
    pub fn new(salary_base_url: String, credit_base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(CALL_TIMEOUT).build()?;
        Ok(Self {
            client,
            salary_base_url,
            credit_base_url,
        })
    }

    /// POST `{SALARY_API_URL}/verify-salary` with bounded retry.
    pub async fn verify_salary(
        &self,
        national_id: &str,
        request_id: &str,
    ) -> Result<SalaryRecord, UpstreamError> {
        let url = format!("{}/verify-salary", self.salary_base_url);
        with_retry(RETRY_ATTEMPTS, RETRY_DELAY, || {
            self.lookup(&url, national_id, request_id)
        })
        .await
    }

    /// POST `{CREDIT_API_URL}/check-credit` with bounded retry.
    pub async fn check_credit(
        &self,
        national_id: &str,
        request_id: &str,
    ) -> Result<CreditReport, UpstreamError> {
        let url = format!("{}/check-credit", self.credit_base_url);
        with_retry(RETRY_ATTEMPTS, RETRY_DELAY, || {
            self.lookup(&url, national_id, request_id)
        })
        .await
    }

    /// One attempt against an upstream endpoint, classified.
    async fn lookup<T: DeserializeOwned>(
        &self,
        url: &str,
        national_id: &str,
        request_id: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .post(url)
            .header("X-Request-ID", request_id)
            .json(&json!({ "national_id": national_id }))
            .send()
            .await
            .map_err(|e| UpstreamError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Unavailable(format!(
                "http error: {} - {}",
                status.as_u16(),
                body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Unavailable(format!("failed to parse response: {}", e)))
    }
}

/// Retry-with-classification combinator shared by both dependencies.
///
/// Retries only `Unavailable` outcomes, sleeping `delay` between attempts;
/// `NotFound` is terminal and returns immediately. After the budget is
/// spent the last failure is surfaced. Dropping the returned future between
/// attempts (client disconnect) abandons the loop.
async fn with_retry<T, F, Fut>(attempts: u32, delay: Duration, op: F) -> Result<T, UpstreamError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    let mut last = UpstreamError::Unavailable("no attempts made".to_string());
    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(UpstreamError::NotFound) => return Err(UpstreamError::NotFound),
            Err(UpstreamError::Unavailable(detail)) => {
                tracing::warn!(attempt, attempts, "upstream attempt failed: {}", detail);
                last = UpstreamError::Unavailable(detail);
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    Err(last)
}
