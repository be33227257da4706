use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Education, EmploymentStatus, LoanApplication, PropertyArea};
use super::intake::IntakePolicy;

pub const MODEL_NAME: &str = "Credit Risk Assessment Model";
pub const MODEL_VERSION: &str = "1.0.0";

/// Static descriptor published on the model info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub version: String,
    pub accuracy: f64,
    pub features: Vec<String>,
    pub trained_on: NaiveDate,
}

impl ModelInfo {
    pub fn current() -> Self {
        Self {
            model_name: MODEL_NAME.to_string(),
            version: MODEL_VERSION.to_string(),
            accuracy: 0.82,
            features: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
            trained_on: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap_or_default(),
        }
    }
}

const FEATURE_NAMES: [&str; 9] = [
    "applicant_income",
    "loan_amount",
    "loan_term_months",
    "credit_history_months",
    "employment_status",
    "property_area",
    "dependents",
    "education",
    "existing_debt",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub constraints: String,
}

/// Required input fields with their constraints, plus a sample payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    pub required_features: BTreeMap<String, FeatureSpec>,
    pub example: LoanApplication,
}

impl FeatureCatalog {
    pub fn for_policy(policy: &IntakePolicy) -> Self {
        let spec = |kind: &str, description: &str, constraints: String| FeatureSpec {
            kind: kind.to_string(),
            description: description.to_string(),
            constraints,
        };

        let entries = [
            (
                "applicant_income",
                spec("number", "Annual income in USD", "> 0".to_string()),
            ),
            (
                "loan_amount",
                spec("number", "Requested loan amount", "> 0".to_string()),
            ),
            (
                "loan_term_months",
                spec(
                    "integer",
                    "Loan term in months",
                    format!(
                        "{} to {}",
                        policy.min_loan_term_months(),
                        policy.max_loan_term_months()
                    ),
                ),
            ),
            (
                "credit_history_months",
                spec("integer", "Length of credit history", ">= 0".to_string()),
            ),
            (
                "employment_status",
                spec(
                    "string",
                    "Employment status",
                    "employed, self-employed, unemployed, retired".to_string(),
                ),
            ),
            (
                "property_area",
                spec(
                    "string",
                    "Location of the financed property",
                    "urban, semiurban, rural".to_string(),
                ),
            ),
            (
                "dependents",
                spec(
                    "integer",
                    "Number of financial dependents",
                    format!("0 to {}", policy.max_dependents()),
                ),
            ),
            (
                "education",
                spec(
                    "string",
                    "Highest education level",
                    "graduate, postgraduate, undergraduate, other".to_string(),
                ),
            ),
            (
                "existing_debt",
                spec("number", "Existing debt amount", ">= 0".to_string()),
            ),
        ];

        Self {
            required_features: entries
                .into_iter()
                .map(|(name, spec)| (name.to_string(), spec))
                .collect(),
            example: example_application(),
        }
    }
}

pub fn example_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 50_000.0,
        loan_amount: 150_000.0,
        loan_term_months: 360,
        credit_history_months: 84,
        employment_status: EmploymentStatus::Employed,
        property_area: PropertyArea::Urban,
        dependents: 2,
        education: Education::Graduate,
        existing_debt: 15_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_info_lists_every_input_feature() {
        let info = ModelInfo::current();
        assert_eq!(info.features.len(), 9);
        assert_eq!(info.trained_on.to_string(), "2026-02-01");
    }

    #[test]
    fn catalog_covers_the_model_features() {
        let catalog = FeatureCatalog::for_policy(&IntakePolicy::default());
        let info = ModelInfo::current();
        for feature in &info.features {
            assert!(catalog.required_features.contains_key(feature));
        }
        assert_eq!(
            catalog.required_features["loan_term_months"].constraints,
            "12 to 480"
        );
    }
}
