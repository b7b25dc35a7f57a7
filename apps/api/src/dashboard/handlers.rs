use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::dashboard::stats::{build_dashboard_stats, DashboardStats};
use crate::errors::AppError;
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// Entries considered when counting journal activity and the streak.
const DASHBOARD_ENTRY_WINDOW: i64 = 50;

/// GET /api/v1/dashboard
pub async fn handle_get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let (assessment, entries, recommendations) = tokio::try_join!(
        state.store.get_personality_assessment(params.user_id),
        state
            .store
            .get_journal_entries(params.user_id, DASHBOARD_ENTRY_WINDOW),
        state.store.get_career_recommendations(params.user_id),
    )?;

    Ok(Json(build_dashboard_stats(assessment.is_some(), &entries, recommendations, Utc::now())))
}
