use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::career::CareerRecord;
use crate::state::AppState;

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerRecord>>, AppError> {
    Ok(Json(state.store.get_all_careers().await?))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CareerRecord>, AppError> {
    let career = state
        .store
        .get_career_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
    Ok(Json(career))
}
