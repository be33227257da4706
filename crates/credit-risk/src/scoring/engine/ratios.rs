use serde::{Deserialize, Serialize};

use super::super::domain::LoanApplication;

/// Financial ratios derived from the raw application, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    /// Existing debt as a percentage of annual income.
    pub debt_to_income: f64,
    /// Requested loan as a multiple of annual income.
    pub loan_to_income: f64,
}

impl FinancialRatios {
    /// Callers guarantee a positive income.
    pub fn compute(applicant_income: f64, existing_debt: f64, loan_amount: f64) -> Self {
        Self {
            debt_to_income: round_to(existing_debt / applicant_income * 100.0, 1),
            loan_to_income: round_to(loan_amount / applicant_income, 1),
        }
    }

    pub fn for_application(application: &LoanApplication) -> Self {
        Self::compute(
            application.applicant_income,
            application.existing_debt,
            application.loan_amount,
        )
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_match_reference_application() {
        let ratios = FinancialRatios::compute(50_000.0, 15_000.0, 150_000.0);
        assert_eq!(ratios.debt_to_income, 30.0);
        assert_eq!(ratios.loan_to_income, 3.0);
    }

    #[test]
    fn ratios_round_to_one_decimal() {
        let ratios = FinancialRatios::compute(30_000.0, 10_000.0, 100_000.0);
        assert_eq!(ratios.debt_to_income, 33.3);
        assert_eq!(ratios.loan_to_income, 3.3);
    }

    #[test]
    fn zero_debt_yields_zero_ratio() {
        let ratios = FinancialRatios::compute(120_000.0, 0.0, 100_000.0);
        assert_eq!(ratios.debt_to_income, 0.0);
        assert_eq!(ratios.loan_to_income, 0.8);
    }

    #[test]
    fn extreme_ratios_stay_finite() {
        let ratios = FinancialRatios::compute(1.0, 0.0, 1e308);
        assert_eq!(ratios.loan_to_income, 1e308);
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);

        let value = serde_json::to_value(ratios).expect("ratios serialize");
        assert!(value["loan_to_income"].is_f64());
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(0.8149, 2), 0.81);
        assert_eq!(round_to(0.756, 2), 0.76);
    }
}
