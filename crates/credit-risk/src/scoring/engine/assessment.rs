use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationId;
use super::explain::KeyFactors;
use super::policy::{ApprovalRecommendation, RiskCategory};
use super::ScoreCard;

/// Final, immutable result returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub application_id: ApplicationId,
    pub risk_score: u8,
    pub risk_category: RiskCategory,
    pub approval_recommendation: ApprovalRecommendation,
    pub confidence: f64,
    pub key_factors: KeyFactors,
    pub debt_to_income_ratio: f64,
    pub loan_to_income_ratio: f64,
    pub processed_at: DateTime<Utc>,
}

impl RiskAssessment {
    pub(crate) fn assemble(card: &ScoreCard, processed_at: DateTime<Utc>) -> Self {
        Self {
            application_id: application_id_for(processed_at),
            risk_score: card.risk_score,
            risk_category: card.risk_category,
            approval_recommendation: card.approval_recommendation,
            confidence: card.confidence,
            key_factors: card.key_factors.clone(),
            debt_to_income_ratio: card.ratios.debt_to_income,
            loan_to_income_ratio: card.ratios.loan_to_income,
            processed_at,
        }
    }
}

pub fn application_id_for(processed_at: DateTime<Utc>) -> ApplicationId {
    ApplicationId(format!("APP-{}", processed_at.format("%Y%m%d%H%M%S")))
}
