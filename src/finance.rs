/// Fixed-rate amortized monthly payment for a loan.
///
/// Converts the annual percentage rate to a monthly rate; a zero rate
/// degenerates to a straight-line `principal / term`. Non-positive principal
/// or term yields 0.0 (the handler validates before calling, this is a
/// guard). The result is rounded to 2 decimal places, half away from zero.
pub fn monthly_payment(principal: f64, term_months: i64, annual_rate_percent: f64) -> f64 {
    if term_months <= 0 || principal <= 0.0 {
        return 0.0;
    }
    let monthly_rate = (annual_rate_percent / 100.0) / 12.0;
    if monthly_rate == 0.0 {
        return round_cents(principal / term_months as f64);
    }
    let n = term_months as f64;
    let power = (1.0 + monthly_rate).powf(n);
    let payment = principal * (monthly_rate * power) / (power - 1.0);
    round_cents(payment)
}

// f64::round is half-away-from-zero, which pins the golden values below.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_principal_or_term_is_zero() {
        assert_eq!(monthly_payment(0.0, 12, 20.0), 0.0);
        assert_eq!(monthly_payment(-1.0, 12, 20.0), 0.0);
        assert_eq!(monthly_payment(50000.0, 0, 20.0), 0.0);
        assert_eq!(monthly_payment(50000.0, -3, 20.0), 0.0);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(monthly_payment(12000.0, 12, 0.0), 1000.00);
        assert_eq!(monthly_payment(10000.0, 3, 0.0), 3333.33);
    }

    #[test]
    fn golden_amortized_values() {
        assert_eq!(monthly_payment(50000.0, 12, 20.0), 4631.73);
        assert_eq!(monthly_payment(100000.0, 24, 20.0), 5089.58);
        assert_eq!(monthly_payment(1000.0, 3, 5.0), 336.11);
    }

    #[test]
    fn deterministic_across_calls() {
        let first = monthly_payment(98765.43, 36, 17.5);
        for _ in 0..100 {
            assert_eq!(monthly_payment(98765.43, 36, 17.5), first);
        }
    }

    #[test]
    fn payment_exceeds_straight_line_under_positive_rate() {
        let with_interest = monthly_payment(50000.0, 12, 20.0);
        let straight = monthly_payment(50000.0, 12, 0.0);
        assert!(with_interest > straight);
    }
}
