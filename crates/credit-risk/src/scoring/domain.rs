use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier stamped on every assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Loan application as received from intake. Monetary amounts are annual figures in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_history_months: u32,
    pub employment_status: EmploymentStatus,
    pub property_area: PropertyArea,
    pub dependents: u32,
    pub education: Education,
    pub existing_debt: f64,
}

impl LoanApplication {
    /// Categorical fields whose value fell outside the closed set, keyed by field name.
    pub fn unrecognized_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::new();
        if let EmploymentStatus::Unrecognized(raw) = &self.employment_status {
            fields.push(("employment_status", raw.as_str()));
        }
        if let PropertyArea::Unrecognized(raw) = &self.property_area {
            fields.push(("property_area", raw.as_str()));
        }
        if let Education::Unrecognized(raw) = &self.education {
            fields.push(("education", raw.as_str()));
        }
        fields
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Retired,
    /// Value outside the known set, kept verbatim for logging.
    Unrecognized(String),
}

impl EmploymentStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "employed" => Self::Employed,
            "self_employed" | "selfemployed" => Self::SelfEmployed,
            "unemployed" => Self::Unemployed,
            "retired" => Self::Retired,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self-employed",
            Self::Unemployed => "unemployed",
            Self::Retired => "retired",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for EmploymentStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EmploymentStatus> for String {
    fn from(value: EmploymentStatus) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
    Unrecognized(String),
}

impl PropertyArea {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "urban" => Self::Urban,
            "semiurban" | "semi_urban" | "suburban" => Self::Semiurban,
            "rural" => Self::Rural,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Urban => "urban",
            Self::Semiurban => "semiurban",
            Self::Rural => "rural",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for PropertyArea {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<PropertyArea> for String {
    fn from(value: PropertyArea) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Education {
    Graduate,
    Postgraduate,
    Undergraduate,
    Other,
    Unrecognized(String),
}

impl Education {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "graduate" => Self::Graduate,
            "postgraduate" | "post_graduate" => Self::Postgraduate,
            "undergraduate" => Self::Undergraduate,
            "other" | "not_graduate" => Self::Other,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Graduate => "graduate",
            Self::Postgraduate => "postgraduate",
            Self::Undergraduate => "undergraduate",
            Self::Other => "other",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Education {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Education> for String {
    fn from(value: Education) -> Self {
        value.label().to_string()
    }
}

/// Risk factors in evaluation order. The order doubles as the tie-break when ranking key factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Income,
    DebtToIncome,
    LoanToIncome,
    CreditHistory,
    Employment,
    Education,
    PropertyArea,
    Dependents,
    LoanTerm,
}

impl FactorKind {
    pub const ALL: [FactorKind; 9] = [
        FactorKind::Income,
        FactorKind::DebtToIncome,
        FactorKind::LoanToIncome,
        FactorKind::CreditHistory,
        FactorKind::Employment,
        FactorKind::Education,
        FactorKind::PropertyArea,
        FactorKind::Dependents,
        FactorKind::LoanTerm,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::Income => "Income",
            FactorKind::DebtToIncome => "Debt-to-income",
            FactorKind::LoanToIncome => "Loan-to-income",
            FactorKind::CreditHistory => "Credit history",
            FactorKind::Employment => "Employment",
            FactorKind::Education => "Education",
            FactorKind::PropertyArea => "Property area",
            FactorKind::Dependents => "Dependents",
            FactorKind::LoanTerm => "Loan term",
        }
    }
}

/// Qualitative direction of a factor's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub const fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_parsing_accepts_aliases() {
        assert_eq!(
            EmploymentStatus::parse("Self_Employed"),
            EmploymentStatus::SelfEmployed
        );
        assert_eq!(
            EmploymentStatus::parse("self-employed"),
            EmploymentStatus::SelfEmployed
        );
        assert_eq!(PropertyArea::parse("suburban"), PropertyArea::Semiurban);
        assert_eq!(Education::parse("not_graduate"), Education::Other);
        assert_eq!(Education::parse(" Post Graduate "), Education::Postgraduate);
    }

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let status = EmploymentStatus::parse(" Contractor ");
        assert_eq!(status, EmploymentStatus::Unrecognized("Contractor".to_string()));
        assert_eq!(status.label(), "Contractor");
    }

    #[test]
    fn application_round_trips_through_json_labels() {
        let payload = serde_json::json!({
            "applicant_income": 50000.0,
            "loan_amount": 150000.0,
            "loan_term_months": 360,
            "credit_history_months": 84,
            "employment_status": "self_employed",
            "property_area": "suburban",
            "dependents": 2,
            "education": "graduate",
            "existing_debt": 15000.0
        });

        let application: LoanApplication =
            serde_json::from_value(payload).expect("application deserializes");
        assert_eq!(application.employment_status, EmploymentStatus::SelfEmployed);
        assert_eq!(application.property_area, PropertyArea::Semiurban);
        assert!(application.unrecognized_fields().is_empty());

        let value = serde_json::to_value(&application).expect("application serializes");
        assert_eq!(value["employment_status"], "self-employed");
        assert_eq!(value["property_area"], "semiurban");
    }

    #[test]
    fn unrecognized_fields_lists_each_unknown_value() {
        let payload = serde_json::json!({
            "applicant_income": 50000.0,
            "loan_amount": 150000.0,
            "loan_term_months": 360,
            "credit_history_months": 84,
            "employment_status": "contractor",
            "property_area": "island",
            "dependents": 2,
            "education": "graduate",
            "existing_debt": 0.0
        });

        let application: LoanApplication =
            serde_json::from_value(payload).expect("application deserializes");
        assert_eq!(
            application.unrecognized_fields(),
            vec![("employment_status", "contractor"), ("property_area", "island")]
        );
    }
}
