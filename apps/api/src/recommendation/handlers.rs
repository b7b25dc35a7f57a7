use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recommendation::RecommendationWithCareer;
use crate::recommendation::generator::{generate_recommendations, GenerationOutcome};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    pub user_id: Uuid,
}

/// GET /api/v1/recommendations
///
/// Highest score first; each row carries its full career record.
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RecommendationWithCareer>>, AppError> {
    Ok(Json(state.store.get_career_recommendations(params.user_id).await?))
}

/// POST /api/v1/recommendations/regenerate
pub async fn handle_regenerate(
    State(state): State<AppState>,
    Json(req): Json<RegenerateRequest>,
) -> Result<Json<GenerationOutcome>, AppError> {
    let outcome = generate_recommendations(
        state.store.as_ref(),
        state.scorer.as_ref(),
        state.generation_settings(),
        req.user_id,
    )
    .await?;
    info!("Manual regeneration for user {}: {outcome:?}", req.user_id);
    Ok(Json(outcome))
}
