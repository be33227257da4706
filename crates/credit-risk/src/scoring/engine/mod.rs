mod assessment;
mod confidence;
mod explain;
mod model;
pub(crate) mod policy;
mod ratios;
pub(crate) mod rules;

pub use assessment::{application_id_for, RiskAssessment};
pub use explain::KeyFactors;
pub use model::{
    Band, BandDirection, BandTable, ConfidenceParams, EducationWeights, EmploymentWeights,
    FactorHeadline, Outcome, PropertyAreaWeights, RiskBands, ScoringModel,
};
pub use policy::{ApprovalRecommendation, RiskCategory};
pub use ratios::FinancialRatios;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{FactorKind, LoanApplication, Polarity};

/// Stateless evaluator that applies the scoring model to an application.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    model: ScoringModel,
}

impl RiskEngine {
    pub fn new(model: ScoringModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    /// Deterministic part of an assessment: everything except identifier and timestamp.
    pub fn evaluate(&self, application: &LoanApplication) -> Result<ScoreCard, AssessmentError> {
        let income = application.applicant_income;
        if !(income.is_finite() && income > 0.0) {
            return Err(AssessmentError::PreconditionViolation { income });
        }

        let ratios = FinancialRatios::for_application(application);
        let factors = rules::score_factors(application, &ratios, &self.model);
        for factor in &factors {
            debug!(
                factor = factor.factor.label(),
                delta = factor.delta,
                polarity = factor.polarity.label(),
                detail = %factor.detail,
                "factor scored"
            );
        }

        let risk_score = policy::aggregate(&factors, &self.model);
        let (risk_category, approval_recommendation) =
            policy::classify(risk_score, &self.model.risk_bands);
        let key_factors = explain::key_factors(&factors, &self.model);
        let confidence = confidence::estimate(risk_score, &self.model.confidence);

        Ok(ScoreCard {
            ratios,
            factors,
            risk_score,
            risk_category,
            approval_recommendation,
            confidence,
            key_factors,
        })
    }

    pub fn assess_at(
        &self,
        application: &LoanApplication,
        processed_at: DateTime<Utc>,
    ) -> Result<RiskAssessment, AssessmentError> {
        let card = self.evaluate(application)?;
        Ok(RiskAssessment::assemble(&card, processed_at))
    }

    pub fn assess(&self, application: &LoanApplication) -> Result<RiskAssessment, AssessmentError> {
        self.assess_at(application, Utc::now())
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(ScoringModel::standard())
    }
}

/// Contribution of a single factor, kept for audits and CLI breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorResult {
    pub factor: FactorKind,
    pub delta: i16,
    pub polarity: Polarity,
    pub detail: String,
}

/// Engine output before an identifier and timestamp are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub ratios: FinancialRatios,
    pub factors: Vec<FactorResult>,
    pub risk_score: u8,
    pub risk_category: RiskCategory,
    pub approval_recommendation: ApprovalRecommendation,
    pub confidence: f64,
    pub key_factors: KeyFactors,
}

impl ScoreCard {
    pub fn factor(&self, kind: FactorKind) -> Option<&FactorResult> {
        self.factors.iter().find(|factor| factor.factor == kind)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("applicant income must be positive to derive ratios (found {income})")]
    PreconditionViolation { income: f64 },
}
