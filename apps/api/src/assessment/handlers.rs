use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::assessment::normalizer::normalize_responses;
use crate::assessment::questions::{find_question, Question, QUESTIONS};
use crate::errors::AppError;
use crate::models::assessment::PersonalityAssessment;
use crate::recommendation::generator::{generate_recommendations, GenerationOutcome};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub user_id: Uuid,
    /// Question id → Likert response (1–5).
    pub answers: BTreeMap<u32, u8>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAssessmentResponse {
    pub assessment: PersonalityAssessment,
    /// `None` when regeneration failed; the assessment itself is still saved.
    pub recommendations: Option<GenerationOutcome>,
}

/// GET /api/v1/assessment/questions
pub async fn handle_list_questions() -> Json<&'static [Question]> {
    Json(QUESTIONS)
}

/// POST /api/v1/assessment
///
/// Normalizes the answers, replaces the stored assessment and regenerates
/// recommendations before responding.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    validate_answers(&req.answers)?;

    let traits = normalize_responses(&req.answers, QUESTIONS);
    let assessment = state
        .store
        .save_personality_assessment(req.user_id, traits)
        .await?;
    info!(
        "Saved assessment for user {} ({} answers)",
        req.user_id,
        req.answers.len()
    );

    let recommendations = match generate_recommendations(
        state.store.as_ref(),
        state.scorer.as_ref(),
        state.generation_settings(),
        req.user_id,
    )
    .await
    {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!(
                "Recommendation generation failed for user {}: {e}",
                req.user_id
            );
            None
        }
    };

    Ok(Json(SubmitAssessmentResponse {
        assessment,
        recommendations,
    }))
}

/// GET /api/v1/assessment
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Option<PersonalityAssessment>>, AppError> {
    Ok(Json(state.store.get_personality_assessment(params.user_id).await?))
}

fn validate_answers(answers: &BTreeMap<u32, u8>) -> Result<(), AppError> {
    if answers.is_empty() {
        return Err(AppError::Validation("answers cannot be empty".to_string()));
    }
    for (&id, &response) in answers {
        if find_question(id).is_none() {
            return Err(AppError::Validation(format!("Unknown question id {id}")));
        }
        if !(1..=5).contains(&response) {
            return Err(AppError::Validation(format!(
                "Answer to question {id} must be between 1 and 5, got {response}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            validate_answers(&BTreeMap::new()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let answers = BTreeMap::from([(1, 6)]);
        assert!(matches!(validate_answers(&answers), Err(AppError::Validation(_))));
        let answers = BTreeMap::from([(1, 0)]);
        assert!(matches!(validate_answers(&answers), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_question() {
        let answers = BTreeMap::from([(42, 3)]);
        assert!(matches!(validate_answers(&answers), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_accepts_partial_questionnaire() {
        let answers = BTreeMap::from([(1, 1), (2, 5), (15, 3)]);
        assert!(validate_answers(&answers).is_ok());
    }
}
