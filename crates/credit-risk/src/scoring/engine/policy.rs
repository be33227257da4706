use serde::{Deserialize, Serialize};

use super::model::{RiskBands, ScoringModel};
use super::FactorResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Medium => "MEDIUM",
            RiskCategory::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalRecommendation {
    Approve,
    Review,
    Decline,
}

impl ApprovalRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            ApprovalRecommendation::Approve => "APPROVE",
            ApprovalRecommendation::Review => "REVIEW",
            ApprovalRecommendation::Decline => "DECLINE",
        }
    }
}

/// Sums factor deltas onto the base score and clamps into the model's range.
pub(crate) fn aggregate(factors: &[FactorResult], model: &ScoringModel) -> u8 {
    let raw = factors
        .iter()
        .fold(i32::from(model.base_score), |total, factor| {
            total + i32::from(factor.delta)
        });
    let floor = i32::from(model.score_floor).max(0);
    let ceiling = i32::from(model.score_ceiling).min(i32::from(u8::MAX));
    raw.clamp(floor, ceiling.max(floor)) as u8
}

pub(crate) fn classify(score: u8, bands: &RiskBands) -> (RiskCategory, ApprovalRecommendation) {
    if score >= bands.low_risk_floor {
        (RiskCategory::Low, ApprovalRecommendation::Approve)
    } else if score >= bands.medium_risk_floor {
        (RiskCategory::Medium, ApprovalRecommendation::Review)
    } else {
        (RiskCategory::High, ApprovalRecommendation::Decline)
    }
}
