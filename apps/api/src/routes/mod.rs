pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::assessment::handlers as assessment;
use crate::careers::handlers as careers;
use crate::dashboard::handlers as dashboard;
use crate::journal::handlers as journal;
use crate::recommendation::handlers as recommendations;
use crate::state::AppState;

/// `?user_id=` on per-user GET endpoints. Identity is supplied by the caller.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handle_list_questions),
        )
        .route(
            "/api/v1/assessment",
            get(assessment::handle_get_assessment).post(assessment::handle_submit_assessment),
        )
        // Journal
        .route(
            "/api/v1/journal",
            get(journal::handle_list_entries).post(journal::handle_create_entry),
        )
        // Career catalog
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route("/api/v1/careers/:id", get(careers::handle_get_career))
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(recommendations::handle_list_recommendations),
        )
        .route(
            "/api/v1/recommendations/regenerate",
            post(recommendations::handle_regenerate),
        )
        .route("/api/v1/dashboard", get(dashboard::handle_get_dashboard))
        .with_state(state)
}
