use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::LoanApplication;
use super::metadata::{FeatureCatalog, ModelInfo};
use super::service::{ScoringService, ScoringServiceError};

/// Router builder exposing scoring and model metadata endpoints.
pub fn scoring_router(service: Arc<ScoringService>) -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/model/info", get(model_info_handler))
        .route("/api/v1/model/features", get(model_features_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<ScoringService>>,
    Json(application): Json<LoanApplication>,
) -> Response {
    match service.score(&application) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(ScoringServiceError::Validation(error)) => {
            warn!(%error, "application rejected at intake");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(ScoringServiceError::Assessment(error)) => {
            warn!(%error, "assessment failed");
            let payload = json!({
                "error": format!("scoring failed: {error}"),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn model_info_handler() -> Json<ModelInfo> {
    Json(ModelInfo::current())
}

pub(crate) async fn model_features_handler(
    State(service): State<Arc<ScoringService>>,
) -> Json<FeatureCatalog> {
    Json(FeatureCatalog::for_policy(service.guard().policy()))
}
