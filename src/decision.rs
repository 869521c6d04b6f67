use crate::models::{CreditReport, DecisionStatus, SalaryRecord};

pub const REASON_SALARY_TOO_LOW: &str =
    "Monthly salary is less than 3x the amortized monthly repayment";
pub const REASON_SCORE_BELOW_MINIMUM: &str = "Credit score below 600";
pub const REASON_ACTIVE_DEFAULTS: &str = "Active defaults present";
pub const REASON_TOO_MANY_LOANS: &str = "More than 3 active loans";

const MINIMUM_CREDIT_SCORE: i64 = 600;
const MAX_ACTIVE_LOANS: i64 = 3;
const SALARY_TO_PAYMENT_RATIO: f64 = 3.0;

/// Outcome of the rule evaluation. `reasons` is empty exactly when approved.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub status: DecisionStatus,
    pub reasons: Vec<String>,
}

impl Decision {
    pub fn primary_reason(&self) -> Option<&str> {
        self.reasons.first().map(String::as_str)
    }
}

/// Evaluates the fixed eligibility rules against resolved facts.
///
/// All four rules are always checked, in declaration order, and every
/// violated rule contributes one reason. The order of `reasons` is therefore
/// stable for a given input: salary coverage, credit score, defaults, loan
/// count.
pub fn evaluate(salary: &SalaryRecord, credit: &CreditReport, monthly_payment: f64) -> Decision {
    let mut reasons = Vec::new();

    if salary.monthly_salary < SALARY_TO_PAYMENT_RATIO * monthly_payment {
        reasons.push(REASON_SALARY_TOO_LOW.to_string());
    }
    if credit.credit_score < MINIMUM_CREDIT_SCORE {
        reasons.push(REASON_SCORE_BELOW_MINIMUM.to_string());
    }
    if credit.active_defaults > 0 {
        reasons.push(REASON_ACTIVE_DEFAULTS.to_string());
    }
    if credit.active_loans > MAX_ACTIVE_LOANS {
        reasons.push(REASON_TOO_MANY_LOANS.to_string());
    }

    let status = if reasons.is_empty() {
        DecisionStatus::Approved
    } else {
        DecisionStatus::Declined
    };
    Decision { status, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary(monthly: f64) -> SalaryRecord {
        SalaryRecord {
            national_id: "12345678".to_string(),
            monthly_salary: monthly,
        }
    }

    fn credit(score: i64, defaults: i64, loans: i64) -> CreditReport {
        CreditReport {
            national_id: "12345678".to_string(),
            credit_score: score,
            active_defaults: defaults,
            active_loans: loans,
        }
    }

    #[test]
    fn clean_profile_is_approved() {
        let decision = evaluate(&salary(350000.0), &credit(650, 0, 2), 4631.73);
        assert_eq!(decision.status, DecisionStatus::Approved);
        assert!(decision.reasons.is_empty());
        assert_eq!(decision.primary_reason(), None);
    }

    #[test]
    fn low_salary_declines() {
        let decision = evaluate(&salary(10000.0), &credit(650, 0, 2), 4631.73);
        assert_eq!(decision.status, DecisionStatus::Declined);
        assert_eq!(decision.reasons, vec![REASON_SALARY_TOO_LOW.to_string()]);
        assert_eq!(decision.primary_reason(), Some(REASON_SALARY_TOO_LOW));
    }

    #[test]
    fn low_score_declines() {
        let decision = evaluate(&salary(120000.0), &credit(540, 0, 1), 4631.73);
        assert_eq!(decision.status, DecisionStatus::Declined);
        assert_eq!(
            decision.reasons,
            vec![REASON_SCORE_BELOW_MINIMUM.to_string()]
        );
    }

    #[test]
    fn defaults_decline() {
        let decision = evaluate(&salary(500000.0), &credit(720, 1, 2), 4631.73);
        assert_eq!(decision.reasons, vec![REASON_ACTIVE_DEFAULTS.to_string()]);
    }

    #[test]
    fn too_many_loans_decline() {
        let decision = evaluate(&salary(500000.0), &credit(720, 0, 4), 4631.73);
        assert_eq!(decision.reasons, vec![REASON_TOO_MANY_LOANS.to_string()]);
        // Exactly 3 loans is still fine.
        let boundary = evaluate(&salary(500000.0), &credit(720, 0, 3), 4631.73);
        assert_eq!(boundary.status, DecisionStatus::Approved);
    }

    #[test]
    fn all_rules_checked_no_short_circuit() {
        let decision = evaluate(&salary(1000.0), &credit(300, 2, 10), 4631.73);
        assert_eq!(
            decision.reasons,
            vec![
                REASON_SALARY_TOO_LOW.to_string(),
                REASON_SCORE_BELOW_MINIMUM.to_string(),
                REASON_ACTIVE_DEFAULTS.to_string(),
                REASON_TOO_MANY_LOANS.to_string(),
            ]
        );
    }

    #[test]
    fn reason_order_is_stable_across_invocations() {
        let first = evaluate(&salary(1000.0), &credit(300, 2, 10), 4631.73);
        for _ in 0..50 {
            let again = evaluate(&salary(1000.0), &credit(300, 2, 10), 4631.73);
            assert_eq!(again.reasons, first.reasons);
        }
    }

    #[test]
    fn adding_defaults_only_adds_its_reason() {
        let before = evaluate(&salary(350000.0), &credit(650, 0, 2), 4631.73);
        assert_eq!(before.status, DecisionStatus::Approved);

        let after = evaluate(&salary(350000.0), &credit(650, 1, 2), 4631.73);
        assert_eq!(after.status, DecisionStatus::Declined);
        assert_eq!(after.reasons, vec![REASON_ACTIVE_DEFAULTS.to_string()]);
        // Every reason present before is still present after.
        for reason in &before.reasons {
            assert!(after.reasons.contains(reason));
        }
    }

    #[test]
    fn boundary_score_of_600_passes() {
        let decision = evaluate(&salary(500000.0), &credit(600, 0, 0), 4631.73);
        assert_eq!(decision.status, DecisionStatus::Approved);
    }

    #[test]
    fn salary_exactly_three_times_payment_passes() {
        let decision = evaluate(&salary(3.0 * 4631.73), &credit(700, 0, 0), 4631.73);
        assert_eq!(decision.status, DecisionStatus::Approved);
    }
}
