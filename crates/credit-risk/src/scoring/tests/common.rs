use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::scoring::domain::{Education, EmploymentStatus, LoanApplication, PropertyArea};
use crate::scoring::engine::{RiskEngine, ScoringModel};
use crate::scoring::service::ScoringService;

/// Middle-of-the-road applicant: only employment scores positive.
pub(super) fn nominal_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 40_000.0,
        loan_amount: 120_000.0,
        loan_term_months: 360,
        credit_history_months: 24,
        employment_status: EmploymentStatus::Employed,
        property_area: PropertyArea::Semiurban,
        dependents: 2,
        education: Education::Other,
        existing_debt: 10_000.0,
    }
}

pub(super) fn strong_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 120_000.0,
        loan_amount: 100_000.0,
        loan_term_months: 180,
        credit_history_months: 72,
        employment_status: EmploymentStatus::Employed,
        property_area: PropertyArea::Urban,
        dependents: 0,
        education: Education::Graduate,
        existing_debt: 0.0,
    }
}

pub(super) fn weak_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 20_000.0,
        loan_amount: 150_000.0,
        loan_term_months: 480,
        credit_history_months: 6,
        employment_status: EmploymentStatus::Unemployed,
        property_area: PropertyArea::Rural,
        dependents: 5,
        education: Education::Other,
        existing_debt: 15_000.0,
    }
}

pub(super) fn processed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 15)
        .single()
        .expect("valid instant")
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(ScoringModel::standard())
}

pub(super) fn service() -> Arc<ScoringService> {
    Arc::new(ScoringService::new(ScoringModel::standard()))
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
