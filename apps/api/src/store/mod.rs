//! Persistence boundary for the recommendation engine.
//!
//! `AppState` holds an `Arc<dyn Store>`; `PgStore` backs production and
//! `MemoryStore` backs local demo runs and the test-suite.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{PersonalityAssessment, TraitVector};
use crate::models::career::{CareerRecord, NewCareer};
use crate::models::journal::{JournalEntry, NewJournalEntry};
use crate::models::recommendation::{RecommendationWithCareer, ScoredCareer};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    async fn get_personality_assessment(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PersonalityAssessment>, AppError>;

    /// Replaces any prior assessment for the user.
    async fn save_personality_assessment(
        &self,
        user_id: Uuid,
        traits: TraitVector,
    ) -> Result<PersonalityAssessment, AppError>;

    async fn create_journal_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry, AppError>;

    /// Most recent first.
    async fn get_journal_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<JournalEntry>, AppError>;

    async fn update_journal_entry_analysis(
        &self,
        entry_id: Uuid,
        keywords: &[String],
        themes: &[String],
        skills: &[String],
    ) -> Result<(), AppError>;

    /// Full catalog in stable catalog order.
    async fn get_all_careers(&self) -> Result<Vec<CareerRecord>, AppError>;

    async fn get_career_by_id(&self, id: Uuid) -> Result<Option<CareerRecord>, AppError>;

    async fn create_career(&self, career: NewCareer) -> Result<CareerRecord, AppError>;

    /// Atomically replaces the user's whole recommendation set with `ranked`.
    /// On error the previous set is left intact.
    async fn save_career_recommendations(
        &self,
        user_id: Uuid,
        ranked: &[ScoredCareer],
    ) -> Result<(), AppError>;

    /// Ordered by match score descending, ties by generated rank.
    async fn get_career_recommendations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RecommendationWithCareer>, AppError>;
}

/// 1-based rank stored for the entry at `position` of a ranked list.
pub(crate) fn rank_for_position(position: usize) -> Result<i32, AppError> {
    position
        .checked_add(1)
        .and_then(|rank| i32::try_from(rank).ok())
        .ok_or_else(|| AppError::Validation(format!("Rank position {position} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_one_based() {
        assert_eq!(rank_for_position(0).unwrap(), 1);
        assert_eq!(rank_for_position(9).unwrap(), 10);
    }

    #[test]
    fn test_rank_out_of_range_is_rejected() {
        let last = i32::MAX as usize - 1;
        assert_eq!(rank_for_position(last).unwrap(), i32::MAX);
        assert!(matches!(rank_for_position(last + 1), Err(AppError::Validation(_))));
        assert!(matches!(rank_for_position(usize::MAX), Err(AppError::Validation(_))));
    }
}
