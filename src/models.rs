use serde::{Deserialize, Serialize};

/// Inbound loan application. Echoed back unchanged in decision responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanApplication {
    pub national_id: String,
    pub loan_amount: f64,
    pub term_months: i64,
}

impl LoanApplication {
    /// Field-level validation applied before any upstream call is made.
    pub fn validate(&self) -> Result<(), String> {
        if self.national_id.trim().is_empty() {
            return Err("national_id must be non-empty".to_string());
        }
        if !(self.loan_amount > 0.0) {
            return Err("loan_amount must be positive".to_string());
        }
        if self.term_months <= 0 {
            return Err("term_months must be positive".to_string());
        }
        Ok(())
    }
}

/// Salary fact returned by the salary verification service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRecord {
    pub national_id: String,
    pub monthly_salary: f64,
}

/// Credit fact returned by the credit bureau service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditReport {
    pub national_id: String,
    pub credit_score: i64,
    pub active_defaults: i64,
    pub active_loans: i64,
}

/// Final decision body for `POST /apply-loan`.
///
/// `reason` duplicates the first entry of `reasons` for callers that only
/// want the primary cause. Both are absent on approvals. The salary and
/// credit echoes carry exactly the facts resolved before the decision (or
/// before a not-found decline), so a salary-side decline never echoes
/// credit data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanDecision {
    pub status: DecisionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<String>>,
    pub monthly_payment: f64,
    pub annual_interest_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<CreditReport>,
    pub application: LoanApplication,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    Approved,
    Declined,
}
