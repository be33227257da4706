use super::domain::LoanApplication;

/// Validation errors raised before an application reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("applicant_income must be greater than zero (found {0})")]
    NonPositiveIncome(f64),
    #[error("loan_amount must be greater than zero (found {0})")]
    NonPositiveLoanAmount(f64),
    #[error("existing_debt must not be negative (found {0})")]
    NegativeExistingDebt(f64),
    #[error("loan_term_months must be between {min} and {max} (found {found})")]
    LoanTermOutOfRange { min: u32, max: u32, found: u32 },
    #[error("dependents must be at most {max} (found {found})")]
    TooManyDependents { max: u32, found: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakePolicyError {
    #[error("minimum loan term {min} exceeds maximum {max}")]
    InvertedLoanTerm { min: u32, max: u32 },
}

const DEFAULT_MIN_LOAN_TERM_MONTHS: u32 = 12;
const DEFAULT_MAX_LOAN_TERM_MONTHS: u32 = 480;
const DEFAULT_MAX_DEPENDENTS: u32 = 10;

/// Structural limits enforced at intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    min_loan_term_months: u32,
    max_loan_term_months: u32,
    max_dependents: u32,
}

impl IntakePolicy {
    pub fn new(
        min_loan_term_months: u32,
        max_loan_term_months: u32,
        max_dependents: u32,
    ) -> Result<Self, IntakePolicyError> {
        if min_loan_term_months > max_loan_term_months {
            return Err(IntakePolicyError::InvertedLoanTerm {
                min: min_loan_term_months,
                max: max_loan_term_months,
            });
        }

        Ok(Self {
            min_loan_term_months,
            max_loan_term_months,
            max_dependents,
        })
    }

    pub fn min_loan_term_months(&self) -> u32 {
        self.min_loan_term_months
    }

    pub fn max_loan_term_months(&self) -> u32 {
        self.max_loan_term_months
    }

    pub fn max_dependents(&self) -> u32 {
        self.max_dependents
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            min_loan_term_months: DEFAULT_MIN_LOAN_TERM_MONTHS,
            max_loan_term_months: DEFAULT_MAX_LOAN_TERM_MONTHS,
            max_dependents: DEFAULT_MAX_DEPENDENTS,
        }
    }
}

/// Checks a deserialized application against the intake policy.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn new(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn validate(&self, application: &LoanApplication) -> Result<(), ValidationError> {
        finite("applicant_income", application.applicant_income)?;
        finite("loan_amount", application.loan_amount)?;
        finite("existing_debt", application.existing_debt)?;

        if application.applicant_income <= 0.0 {
            return Err(ValidationError::NonPositiveIncome(
                application.applicant_income,
            ));
        }
        if application.loan_amount <= 0.0 {
            return Err(ValidationError::NonPositiveLoanAmount(
                application.loan_amount,
            ));
        }
        if application.existing_debt < 0.0 {
            return Err(ValidationError::NegativeExistingDebt(
                application.existing_debt,
            ));
        }

        let term = application.loan_term_months;
        if term < self.policy.min_loan_term_months || term > self.policy.max_loan_term_months {
            return Err(ValidationError::LoanTermOutOfRange {
                min: self.policy.min_loan_term_months,
                max: self.policy.max_loan_term_months,
                found: term,
            });
        }

        if application.dependents > self.policy.max_dependents {
            return Err(ValidationError::TooManyDependents {
                max: self.policy.max_dependents,
                found: application.dependents,
            });
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}
