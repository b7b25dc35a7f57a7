use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{PersonalityAssessment, TraitVector};
use crate::models::career::{CareerRecord, NewCareer};
use crate::models::journal::{JournalEntry, NewJournalEntry};
use crate::models::recommendation::{Recommendation, RecommendationWithCareer, ScoredCareer};
use crate::store::{rank_for_position, Store};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn get_personality_assessment(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PersonalityAssessment>, AppError> {
        Ok(sqlx::query_as::<_, PersonalityAssessment>(
            "SELECT * FROM personality_assessments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn save_personality_assessment(
        &self,
        user_id: Uuid,
        traits: TraitVector,
    ) -> Result<PersonalityAssessment, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM personality_assessments WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let assessment = sqlx::query_as::<_, PersonalityAssessment>(
            r#"
            INSERT INTO personality_assessments
                (id, user_id, openness, conscientiousness, extraversion, agreeableness, neuroticism)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(traits.openness)
        .bind(traits.conscientiousness)
        .bind(traits.extraversion)
        .bind(traits.agreeableness)
        .bind(traits.neuroticism)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(assessment)
    }

    async fn create_journal_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry, AppError> {
        Ok(sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries (id, user_id, mood, enjoyed, challenges, learned)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(entry.mood.map(|m| m.as_str()))
        .bind(entry.enjoyed)
        .bind(entry.challenges)
        .bind(entry.learned)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn get_journal_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<JournalEntry>, AppError> {
        Ok(sqlx::query_as::<_, JournalEntry>(
            "SELECT * FROM journal_entries WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn update_journal_entry_analysis(
        &self,
        entry_id: Uuid,
        keywords: &[String],
        themes: &[String],
        skills: &[String],
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE journal_entries SET keywords = $2, themes = $3, skills = $4 WHERE id = $1",
        )
        .bind(entry_id)
        .bind(keywords)
        .bind(themes)
        .bind(skills)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Journal entry {entry_id} not found")));
        }
        Ok(())
    }

    async fn get_all_careers(&self) -> Result<Vec<CareerRecord>, AppError> {
        Ok(
            sqlx::query_as::<_, CareerRecord>("SELECT * FROM careers ORDER BY catalog_order ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_career_by_id(&self, id: Uuid) -> Result<Option<CareerRecord>, AppError> {
        Ok(
            sqlx::query_as::<_, CareerRecord>("SELECT * FROM careers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_career(&self, career: NewCareer) -> Result<CareerRecord, AppError> {
        Ok(sqlx::query_as::<_, CareerRecord>(
            r#"
            INSERT INTO careers
                (id, title, description, salary_min, salary_max, growth_rate, education_level,
                 remote_work, skills, interests, personality_vector,
                 roadmap_year1, roadmap_year2, roadmap_year3, icon_class, color_scheme)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&career.title)
        .bind(&career.description)
        .bind(career.salary_min)
        .bind(career.salary_max)
        .bind(career.growth_rate)
        .bind(&career.education_level)
        .bind(career.remote_work)
        .bind(&career.skills)
        .bind(&career.interests)
        .bind(career.personality_vector.map(Json))
        .bind(&career.roadmap_year1)
        .bind(&career.roadmap_year2)
        .bind(&career.roadmap_year3)
        .bind(&career.icon_class)
        .bind(&career.color_scheme)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn save_career_recommendations(
        &self,
        user_id: Uuid,
        ranked: &[ScoredCareer],
    ) -> Result<(), AppError> {
        // Delete + insert in one transaction: readers see either the old set or the new one.
        let mut tx = self.pool.begin().await?;

        // Replaces for the same user run one at a time; the lock is released on commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM career_recommendations WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for (position, scored) in ranked.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO career_recommendations (id, user_id, career_id, match_score, rank)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(scored.career_id)
            .bind(scored.match_score)
            .bind(rank_for_position(position)?)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(
            "Replaced recommendations for user {user_id} with {} rows",
            ranked.len()
        );
        Ok(())
    }

    async fn get_career_recommendations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RecommendationWithCareer>, AppError> {
        let recommendations = sqlx::query_as::<_, Recommendation>(
            r#"
            SELECT * FROM career_recommendations
            WHERE user_id = $1
            ORDER BY match_score DESC, rank ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        if recommendations.is_empty() {
            return Ok(vec![]);
        }

        let career_ids: Vec<Uuid> = recommendations.iter().map(|r| r.career_id).collect();
        let mut careers: HashMap<Uuid, CareerRecord> =
            sqlx::query_as::<_, CareerRecord>("SELECT * FROM careers WHERE id = ANY($1)")
                .bind(&career_ids)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        recommendations
            .into_iter()
            .map(|recommendation| {
                let career = careers.remove(&recommendation.career_id).ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Recommendation {} references missing career {}",
                        recommendation.id,
                        recommendation.career_id
                    ))
                })?;
                Ok(RecommendationWithCareer {
                    recommendation,
                    career,
                })
            })
            .collect()
    }
}
