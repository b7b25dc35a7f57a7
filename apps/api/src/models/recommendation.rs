use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::career::CareerRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub career_id: Uuid,
    pub match_score: f64,
    /// Position in the generated ranking, starting at 1. Breaks score ties on read.
    pub rank: i32,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationWithCareer {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub career: CareerRecord,
}

/// One scored career, as produced by the ranking step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub career_id: Uuid,
    pub match_score: f64,
}
