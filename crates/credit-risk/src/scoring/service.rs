use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::LoanApplication;
use super::engine::{AssessmentError, RiskAssessment, RiskEngine, ScoreCard, ScoringModel};
use super::intake::{IntakeGuard, IntakePolicy, ValidationError};

/// Service composing the intake guard and the scoring engine.
#[derive(Debug, Clone, Default)]
pub struct ScoringService {
    guard: IntakeGuard,
    engine: RiskEngine,
}

impl ScoringService {
    pub fn new(model: ScoringModel) -> Self {
        Self::with_policy(IntakePolicy::default(), model)
    }

    pub fn with_policy(policy: IntakePolicy, model: ScoringModel) -> Self {
        Self {
            guard: IntakeGuard::new(policy),
            engine: RiskEngine::new(model),
        }
    }

    pub fn guard(&self) -> &IntakeGuard {
        &self.guard
    }

    pub fn engine(&self) -> &RiskEngine {
        &self.engine
    }

    /// Score an application stamped with the current instant.
    pub fn score(
        &self,
        application: &LoanApplication,
    ) -> Result<RiskAssessment, ScoringServiceError> {
        self.score_at(application, Utc::now())
    }

    pub fn score_at(
        &self,
        application: &LoanApplication,
        processed_at: DateTime<Utc>,
    ) -> Result<RiskAssessment, ScoringServiceError> {
        self.score_card_at(application, processed_at)
            .map(|(_, assessment)| assessment)
    }

    /// Score once, returning the factor breakdown alongside the assessment built from it.
    pub fn score_card_at(
        &self,
        application: &LoanApplication,
        processed_at: DateTime<Utc>,
    ) -> Result<(ScoreCard, RiskAssessment), ScoringServiceError> {
        let card = self.evaluate(application)?;
        let assessment = RiskAssessment::assemble(&card, processed_at);

        let recovered = application.unrecognized_fields();
        if !recovered.is_empty() {
            warn!(
                application_id = %assessment.application_id,
                fields = ?recovered,
                "application carried unrecognized categorical values"
            );
        }

        info!(
            application_id = %assessment.application_id,
            risk_score = assessment.risk_score,
            risk_category = assessment.risk_category.label(),
            recommendation = assessment.approval_recommendation.label(),
            "application scored"
        );

        Ok((card, assessment))
    }

    /// Validate and evaluate without attaching an identifier, keeping the factor breakdown.
    pub fn evaluate(
        &self,
        application: &LoanApplication,
    ) -> Result<ScoreCard, ScoringServiceError> {
        self.guard.validate(application)?;
        Ok(self.engine.evaluate(application)?)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}
