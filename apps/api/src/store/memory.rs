use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{PersonalityAssessment, TraitVector};
use crate::models::career::{CareerRecord, NewCareer};
use crate::models::journal::{JournalEntry, NewJournalEntry};
use crate::models::recommendation::{Recommendation, RecommendationWithCareer, ScoredCareer};
use crate::store::{rank_for_position, Store};

#[derive(Default)]
struct Tables {
    assessments: HashMap<Uuid, PersonalityAssessment>,
    /// Append-only, creation order.
    journal_entries: Vec<JournalEntry>,
    /// Catalog order.
    careers: Vec<CareerRecord>,
    recommendations: HashMap<Uuid, Vec<Recommendation>>,
}

/// Process-local store. Every mutation happens under a single write lock, so a
/// recommendation replace is never observable half-done.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_personality_assessment(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PersonalityAssessment>, AppError> {
        Ok(self.tables.read().await.assessments.get(&user_id).cloned())
    }

    async fn save_personality_assessment(
        &self,
        user_id: Uuid,
        traits: TraitVector,
    ) -> Result<PersonalityAssessment, AppError> {
        let assessment = PersonalityAssessment {
            id: Uuid::new_v4(),
            user_id,
            traits,
            completed_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .assessments
            .insert(user_id, assessment.clone());
        Ok(assessment)
    }

    async fn create_journal_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry, AppError> {
        let row = JournalEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            mood: entry.mood.map(|m| m.as_str().to_string()),
            enjoyed: entry.enjoyed,
            challenges: entry.challenges,
            learned: entry.learned,
            keywords: None,
            themes: None,
            skills: None,
            created_at: Utc::now(),
        };
        self.tables.write().await.journal_entries.push(row.clone());
        Ok(row)
    }

    async fn get_journal_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<JournalEntry>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .tables
            .read()
            .await
            .journal_entries
            .iter()
            .rev()
            .filter(|e| e.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_journal_entry_analysis(
        &self,
        entry_id: Uuid,
        keywords: &[String],
        themes: &[String],
        skills: &[String],
    ) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let entry = tables
            .journal_entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| AppError::NotFound(format!("Journal entry {entry_id} not found")))?;
        entry.keywords = Some(keywords.to_vec());
        entry.themes = Some(themes.to_vec());
        entry.skills = Some(skills.to_vec());
        Ok(())
    }

    async fn get_all_careers(&self) -> Result<Vec<CareerRecord>, AppError> {
        Ok(self.tables.read().await.careers.clone())
    }

    async fn get_career_by_id(&self, id: Uuid) -> Result<Option<CareerRecord>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .careers
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create_career(&self, career: NewCareer) -> Result<CareerRecord, AppError> {
        let record = career.into_record(Uuid::new_v4());
        self.tables.write().await.careers.push(record.clone());
        Ok(record)
    }

    async fn save_career_recommendations(
        &self,
        user_id: Uuid,
        ranked: &[ScoredCareer],
    ) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;

        // Mirrors the Postgres foreign key and unique constraint. Validated before mutating.
        let known: HashSet<Uuid> = tables.careers.iter().map(|c| c.id).collect();
        let mut seen = HashSet::new();
        for scored in ranked {
            if !known.contains(&scored.career_id) {
                return Err(AppError::NotFound(format!("Career {} not found", scored.career_id)));
            }
            if !seen.insert(scored.career_id) {
                return Err(AppError::Validation(format!(
                    "Career {} ranked more than once",
                    scored.career_id
                )));
            }
        }

        let generated_at = Utc::now();
        let rows = ranked
            .iter()
            .enumerate()
            .map(|(position, scored)| {
                Ok(Recommendation {
                    id: Uuid::new_v4(),
                    user_id,
                    career_id: scored.career_id,
                    match_score: scored.match_score,
                    rank: rank_for_position(position)?,
                    generated_at,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        tables.recommendations.insert(user_id, rows);
        Ok(())
    }

    async fn get_career_recommendations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RecommendationWithCareer>, AppError> {
        let tables = self.tables.read().await;
        let Some(rows) = tables.recommendations.get(&user_id) else {
            return Ok(vec![]);
        };

        let mut joined: Vec<RecommendationWithCareer> = rows
            .iter()
            .filter_map(|recommendation| {
                tables
                    .careers
                    .iter()
                    .find(|c| c.id == recommendation.career_id)
                    .map(|career| RecommendationWithCareer {
                        recommendation: recommendation.clone(),
                        career: career.clone(),
                    })
            })
            .collect();
        joined.sort_by(|a, b| {
            b.recommendation
                .match_score
                .total_cmp(&a.recommendation.match_score)
                .then(a.recommendation.rank.cmp(&b.recommendation.rank))
        });
        Ok(joined)
    }
}
