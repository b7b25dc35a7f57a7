use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The five Big Five dimensions, in the fixed order every scorer iterates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    pub fn index(self) -> usize {
        match self {
            Trait::Openness => 0,
            Trait::Conscientiousness => 1,
            Trait::Extraversion => 2,
            Trait::Agreeableness => 3,
            Trait::Neuroticism => 4,
        }
    }
}

/// Normalized personality profile. Every field lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, FromRow)]
pub struct TraitVector {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitVector {
    pub fn new(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }

    /// Builds a vector by evaluating `f` once per dimension.
    pub fn from_fn(mut f: impl FnMut(Trait) -> f64) -> Self {
        Self {
            openness: f(Trait::Openness),
            conscientiousness: f(Trait::Conscientiousness),
            extraversion: f(Trait::Extraversion),
            agreeableness: f(Trait::Agreeableness),
            neuroticism: f(Trait::Neuroticism),
        }
    }

    pub fn get(&self, dimension: Trait) -> f64 {
        match dimension {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }
}

/// Persisted questionnaire result. One row per user; a new submission replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalityAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub traits: TraitVector,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_reads_every_dimension() {
        let v = TraitVector::new(0.1, 0.2, 0.3, 0.4, 0.5);
        let read: Vec<f64> = Trait::ALL.iter().map(|t| v.get(*t)).collect();
        assert_eq!(read, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_from_fn_matches_index_order() {
        let v = TraitVector::from_fn(|t| t.index() as f64);
        assert_eq!(v, TraitVector::new(0.0, 1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_assessment_serializes_flat() {
        let assessment = PersonalityAssessment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            traits: TraitVector::new(0.8, 0.7, 0.6, 0.7, 0.3),
            completed_at: Utc::now(),
        };
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["openness"], 0.8);
        assert!(json.get("traits").is_none());
    }
}
