use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::journal::followup::spawn_entry_followups;
use crate::models::journal::{JournalEntry, Mood, NewJournalEntry};
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: i64 = 10;
const MAX_LIST_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct CreateJournalEntryRequest {
    pub user_id: Uuid,
    pub mood: Option<Mood>,
    pub enjoyed: Option<String>,
    pub challenges: Option<String>,
    pub learned: Option<String>,
}

impl CreateJournalEntryRequest {
    fn into_new_entry(self) -> Result<NewJournalEntry, AppError> {
        let entry = NewJournalEntry {
            user_id: self.user_id,
            mood: self.mood,
            enjoyed: non_blank(self.enjoyed),
            challenges: non_blank(self.challenges),
            learned: non_blank(self.learned),
        };
        if entry.enjoyed.is_none() && entry.challenges.is_none() && entry.learned.is_none() {
            return Err(AppError::Validation(
                "At least one of enjoyed, challenges or learned is required".to_string(),
            ));
        }
        Ok(entry)
    }
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct JournalListQuery {
    pub user_id: Uuid,
    pub limit: Option<i64>,
}

/// POST /api/v1/journal
///
/// Persists the entry and returns immediately. Analysis and recommendation
/// refresh run afterwards on a detached task.
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(req): Json<CreateJournalEntryRequest>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let new_entry = req.into_new_entry()?;
    let entry = state.store.create_journal_entry(new_entry).await?;
    info!(
        "Created journal entry {} for user {}",
        entry.id, entry.user_id
    );

    spawn_entry_followups(state.clone(), entry.clone());

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/journal
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Query(params): Query<JournalListQuery>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);
    Ok(Json(state.store.get_journal_entries(params.user_id, limit).await?))
}
