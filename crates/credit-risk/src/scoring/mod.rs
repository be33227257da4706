//! Loan application risk scoring.
//!
//! Applications pass the intake guard, then the engine derives ratios, scores each
//! factor against the immutable [`ScoringModel`], aggregates and classifies the score,
//! and assembles a [`RiskAssessment`]. Nothing here holds state between calls.

pub mod batch;
pub mod domain;
pub mod engine;
pub mod intake;
pub mod metadata;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchEntry, BatchReport, BatchScorer, BatchScoringError, BatchSummary};
pub use domain::{
    ApplicationId, Education, EmploymentStatus, FactorKind, LoanApplication, Polarity,
    PropertyArea,
};
pub use engine::{
    ApprovalRecommendation, AssessmentError, FactorResult, FinancialRatios, KeyFactors,
    RiskAssessment, RiskCategory, RiskEngine, ScoreCard, ScoringModel,
};
pub use intake::{IntakeGuard, IntakePolicy, IntakePolicyError, ValidationError};
pub use metadata::{FeatureCatalog, ModelInfo};
pub use router::scoring_router;
pub use service::{ScoringService, ScoringServiceError};
