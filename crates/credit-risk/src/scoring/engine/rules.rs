use tracing::warn;

use super::super::domain::{
    Education, EmploymentStatus, FactorKind, LoanApplication, PropertyArea,
};
use super::model::{Outcome, ScoringModel};
use super::ratios::FinancialRatios;
use super::FactorResult;

/// Evaluates every factor once, in [`FactorKind::ALL`] order.
pub(crate) fn score_factors(
    application: &LoanApplication,
    ratios: &FinancialRatios,
    model: &ScoringModel,
) -> Vec<FactorResult> {
    vec![
        income_factor(application.applicant_income, model),
        debt_to_income_factor(ratios.debt_to_income, model),
        loan_to_income_factor(ratios.loan_to_income, model),
        credit_history_factor(application.credit_history_months, model),
        employment_factor(&application.employment_status, model),
        education_factor(&application.education, model),
        property_area_factor(&application.property_area, model),
        dependents_factor(application.dependents, model),
        loan_term_factor(application.loan_term_months, model),
    ]
}

fn result(factor: FactorKind, outcome: Outcome, detail: String) -> FactorResult {
    FactorResult {
        factor,
        delta: outcome.delta,
        polarity: outcome.polarity,
        detail,
    }
}

pub(crate) fn income_factor(income: f64, model: &ScoringModel) -> FactorResult {
    let outcome = model.income.evaluate(income);
    result(
        FactorKind::Income,
        outcome,
        format!("annual income {income:.0}"),
    )
}

pub(crate) fn debt_to_income_factor(ratio: f64, model: &ScoringModel) -> FactorResult {
    let outcome = model.debt_to_income.evaluate(ratio);
    result(
        FactorKind::DebtToIncome,
        outcome,
        format!("debt-to-income ratio {ratio:.1}%"),
    )
}

pub(crate) fn loan_to_income_factor(ratio: f64, model: &ScoringModel) -> FactorResult {
    let outcome = model.loan_to_income.evaluate(ratio);
    result(
        FactorKind::LoanToIncome,
        outcome,
        format!("loan is {ratio:.1}x annual income"),
    )
}

pub(crate) fn credit_history_factor(months: u32, model: &ScoringModel) -> FactorResult {
    let outcome = model.credit_history.evaluate(f64::from(months));
    result(
        FactorKind::CreditHistory,
        outcome,
        format!("{months} months of credit history"),
    )
}

pub(crate) fn employment_factor(status: &EmploymentStatus, model: &ScoringModel) -> FactorResult {
    let weights = &model.employment;
    let outcome = match status {
        EmploymentStatus::Employed => weights.employed,
        EmploymentStatus::SelfEmployed => weights.self_employed,
        EmploymentStatus::Retired => weights.retired,
        EmploymentStatus::Unemployed => weights.unemployed,
        EmploymentStatus::Unrecognized(raw) => {
            warn!(field = "employment_status", value = %raw, "unrecognized value scored as neutral");
            return result(
                FactorKind::Employment,
                weights.unrecognized,
                format!("unrecognized employment status '{raw}'"),
            );
        }
    };
    result(
        FactorKind::Employment,
        outcome,
        format!("employment status {}", status.label()),
    )
}

pub(crate) fn education_factor(education: &Education, model: &ScoringModel) -> FactorResult {
    let weights = &model.education;
    let outcome = match education {
        Education::Graduate => weights.graduate,
        Education::Postgraduate => weights.postgraduate,
        Education::Undergraduate => weights.undergraduate,
        Education::Other => weights.other,
        Education::Unrecognized(raw) => {
            warn!(field = "education", value = %raw, "unrecognized value scored as neutral");
            return result(
                FactorKind::Education,
                weights.unrecognized,
                format!("unrecognized education level '{raw}'"),
            );
        }
    };
    result(
        FactorKind::Education,
        outcome,
        format!("education level {}", education.label()),
    )
}

pub(crate) fn property_area_factor(area: &PropertyArea, model: &ScoringModel) -> FactorResult {
    let weights = &model.property_area;
    let outcome = match area {
        PropertyArea::Urban => weights.urban,
        PropertyArea::Semiurban => weights.semiurban,
        PropertyArea::Rural => weights.rural,
        PropertyArea::Unrecognized(raw) => {
            warn!(field = "property_area", value = %raw, "unrecognized value scored as neutral");
            return result(
                FactorKind::PropertyArea,
                weights.unrecognized,
                format!("unrecognized property area '{raw}'"),
            );
        }
    };
    result(
        FactorKind::PropertyArea,
        outcome,
        format!("{} property", area.label()),
    )
}

pub(crate) fn dependents_factor(dependents: u32, model: &ScoringModel) -> FactorResult {
    let outcome = model.dependents.evaluate(f64::from(dependents));
    result(
        FactorKind::Dependents,
        outcome,
        format!("{dependents} dependent(s)"),
    )
}

pub(crate) fn loan_term_factor(months: u32, model: &ScoringModel) -> FactorResult {
    let outcome = model.loan_term.evaluate(f64::from(months));
    result(
        FactorKind::LoanTerm,
        outcome,
        format!("{months} month loan term"),
    )
}
