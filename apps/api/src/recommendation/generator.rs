//! Recommendation generation: runs the scoring pipeline for one user.
//!
//! Flow: load (assessment, recent journal, catalog) concurrently → build profile →
//!       score every career → stable sort → top N → replace persisted set.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{DEFAULT_JOURNAL_HISTORY_LIMIT, DEFAULT_RECOMMENDATION_LIMIT};
use crate::errors::AppError;
use crate::models::career::CareerRecord;
use crate::models::recommendation::ScoredCareer;
use crate::recommendation::profile::{build_user_profile, UserProfile};
use crate::recommendation::scoring::CareerScorer;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Most recent journal entries considered.
    pub history_limit: i64,
    /// Careers kept after ranking.
    pub top_n: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_JOURNAL_HISTORY_LIMIT,
            top_n: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoAssessment,
    EmptyCatalog,
}

/// What a generation run did. Skips are expected states, not failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated {
        count: usize,
        top_score: Option<f64>,
    },
    Skipped {
        reason: SkipReason,
    },
}

/// Regenerates and persists the recommendation set for `user_id`.
///
/// Missing assessment or empty catalog leaves stored recommendations untouched.
/// Store errors propagate; the store guarantees the previous set survives them.
pub async fn generate_recommendations(
    store: &dyn Store,
    scorer: &dyn CareerScorer,
    settings: GenerationSettings,
    user_id: Uuid,
) -> Result<GenerationOutcome, AppError> {
    let (assessment, entries, careers) = tokio::try_join!(
        store.get_personality_assessment(user_id),
        store.get_journal_entries(user_id, settings.history_limit),
        store.get_all_careers(),
    )?;

    let Some(assessment) = assessment else {
        debug!("No assessment for user {user_id}; skipping recommendation generation");
        return Ok(GenerationOutcome::Skipped {
            reason: SkipReason::NoAssessment,
        });
    };
    if careers.is_empty() {
        debug!("Career catalog is empty; skipping recommendation generation");
        return Ok(GenerationOutcome::Skipped {
            reason: SkipReason::EmptyCatalog,
        });
    }

    let profile = build_user_profile(Some(assessment.traits), &entries);
    let ranked = rank_careers(&profile, &careers, scorer, settings.top_n);

    store.save_career_recommendations(user_id, &ranked).await?;

    let top_score = ranked.first().map(|r| r.match_score);
    info!(
        "Generated {} recommendations for user {user_id} from {} careers, {} entries (top {:?})",
        ranked.len(),
        careers.len(),
        entries.len(),
        top_score
    );

    Ok(GenerationOutcome::Generated {
        count: ranked.len(),
        top_score,
    })
}

/// Scores every career and keeps the best `top_n`, highest first.
/// Equal scores keep their catalog order.
pub fn rank_careers(
    profile: &UserProfile,
    careers: &[CareerRecord],
    scorer: &dyn CareerScorer,
    top_n: usize,
) -> Vec<ScoredCareer> {
    let mut scored: Vec<ScoredCareer> = careers
        .iter()
        .map(|career| ScoredCareer {
            career_id: career.id,
            match_score: scorer.score(profile, career),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored.truncate(top_n);
    scored
}
