//! Career scoring: a pluggable scorer that measures a user profile against one career.
//!
//! Default: `WeightedCosineScorer`, a pure deterministic similarity over three
//! channels (personality, interests, skills). `AppState` holds an
//! `Arc<dyn CareerScorer>`.

use serde::{Deserialize, Serialize};

use crate::models::assessment::Trait;
use crate::models::career::CareerRecord;
use crate::recommendation::profile::UserProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChannelWeights {
    pub personality: f64,
    pub interest: f64,
    pub skill: f64,
}

impl Default for ChannelWeights {
    fn default() -> Self {
        Self {
            personality: 0.6,
            interest: 0.3,
            skill: 0.1,
        }
    }
}

/// Implement this to swap scoring backends without touching the generator or handlers.
pub trait CareerScorer: Send + Sync {
    /// Match score in [0, 1]. Must be pure: same inputs, same output.
    fn score(&self, profile: &UserProfile, career: &CareerRecord) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedCosineScorer {
    pub weights: ChannelWeights,
}

impl CareerScorer for WeightedCosineScorer {
    fn score(&self, profile: &UserProfile, career: &CareerRecord) -> f64 {
        compute_match_score(profile, career, &self.weights)
    }
}

/// Running dot product and squared magnitudes shared by all three channels.
#[derive(Debug, Default)]
struct Accumulator {
    dot: f64,
    user_sq: f64,
    career_sq: f64,
}

impl Accumulator {
    fn add(&mut self, user: f64, career: f64, weight: f64) {
        self.dot += user * career * weight;
        self.user_sq += (user * weight).powi(2);
        self.career_sq += (career * weight).powi(2);
    }

    fn cosine(&self) -> f64 {
        let magnitude = self.user_sq.sqrt() * self.career_sq.sqrt();
        if magnitude > 0.0 {
            (self.dot / magnitude).min(1.0)
        } else {
            0.0
        }
    }
}

/// Weighted similarity between a profile and a career.
///
/// Channel values are multiplied by the channel weight before squaring, so the
/// weight enters the magnitudes quadratically while the dot product carries it
/// once. Zero magnitude on either side yields 0.
pub fn compute_match_score(
    profile: &UserProfile,
    career: &CareerRecord,
    weights: &ChannelWeights,
) -> f64 {
    let mut acc = Accumulator::default();

    if let Some(reference) = career.reference_traits() {
        for dimension in Trait::ALL {
            let user = profile.traits.map(|t| t.get(dimension)).unwrap_or(0.0);
            acc.add(user, reference.get(dimension), weights.personality);
        }
    }

    let total_themes = f64::from(profile.total_themes().max(1));
    for interest in &career.interests {
        let count = profile.theme_counts.get(interest).copied().unwrap_or(0);
        acc.add(f64::from(count) / total_themes, 1.0, weights.interest);
    }

    let total_skills = f64::from(profile.total_skills().max(1));
    for skill in &career.skills {
        let key = normalize_skill_label(skill);
        let count = profile.skill_counts.get(&key).copied().unwrap_or(0);
        acc.add(f64::from(count) / total_skills, 1.0, weights.skill);
    }

    acc.cosine()
}

/// "Python/R" → "python_r": lower-case, every character outside `a-z` becomes `_`.
pub fn normalize_skill_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::TraitVector;
    use crate::models::career::NewCareer;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn career(vector: Option<TraitVector>, interests: &[&str], skills: &[&str]) -> CareerRecord {
        NewCareer {
            title: "Test Career".to_string(),
            description: "for scoring".to_string(),
            personality_vector: vector,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
        .into_record(Uuid::new_v4())
    }

    fn counts(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn profile(
        traits: Option<TraitVector>,
        themes: &[(&str, u32)],
        skills: &[(&str, u32)],
    ) -> UserProfile {
        UserProfile {
            traits,
            theme_counts: counts(themes),
            skill_counts: counts(skills),
        }
    }

    fn match_score(user: &UserProfile, c: &CareerRecord) -> f64 {
        compute_match_score(user, c, &ChannelWeights::default())
    }

    fn ux_vector() -> TraitVector {
        TraitVector::new(0.8, 0.7, 0.6, 0.7, 0.3)
    }

    #[test]
    fn test_identical_personality_scores_one() {
        let user = profile(Some(ux_vector()), &[], &[]);
        let score = match_score(&user, &career(Some(ux_vector()), &[], &[]));
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
        assert!(score <= 1.0);
    }

    #[test]
    fn test_empty_career_scores_exactly_zero() {
        let user = profile(
            Some(ux_vector()),
            &[("technology", 3)],
            &[("programming", 2)],
        );
        assert_eq!(match_score(&user, &career(None, &[], &[])), 0.0);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        // No traits, no themes, no skills on the user side
        let user = profile(None, &[], &[]);
        let c = career(Some(ux_vector()), &["creativity"], &["Figma"]);
        assert_eq!(match_score(&user, &c), 0.0);
    }

    #[test]
    fn test_single_channel_match_saturates_at_one() {
        // u = 2/2 = 1 on the single interest; dot = 0.3, |u|·|c| = 0.09 → capped
        let user = profile(None, &[("technology", 2)], &[]);
        assert_eq!(match_score(&user, &career(None, &["technology"], &[])), 1.0);
    }

    #[test]
    fn test_partial_personality_overlap() {
        // cos(u, c) = 0.2 / 0.6 = 1/3; the weight divides out once more → (1/3) / 0.6 = 5/9
        let user = profile(Some(TraitVector::new(1.0, 0.0, 0.0, 0.0, 0.0)), &[], &[]);
        let c = career(Some(TraitVector::new(0.2, 0.4, 0.4, 0.0, 0.0)), &[], &[]);
        let score = match_score(&user, &c);
        assert!((score - 5.0 / 9.0).abs() < 1e-12, "score was {score}");
    }

    #[test]
    fn test_interest_share_uses_total_theme_count() {
        let traits = Some(TraitVector::new(1.0, 0.0, 0.0, 0.0, 0.0));
        let vector = Some(TraitVector::new(0.2, 0.4, 0.4, 0.0, 0.0));
        let c = career(vector, &["technology"], &[]);

        let focused = profile(traits, &[("technology", 1)], &[]);
        let diluted = profile(traits, &[("technology", 1), ("helping", 3)], &[]);

        let focused_score = match_score(&focused, &c);
        let diluted_score = match_score(&diluted, &c);

        // diluted: interest share 1/4
        let dot = 0.6 * 0.2 + 0.3 * 0.25;
        let user_sq = 0.6_f64.powi(2) + (0.3 * 0.25_f64).powi(2);
        let career_sq =
            (0.6 * 0.2_f64).powi(2) + 2.0 * (0.6 * 0.4_f64).powi(2) + 0.3_f64.powi(2);
        let expected = dot / (user_sq.sqrt() * career_sq.sqrt());

        assert!(
            (diluted_score - expected).abs() < 1e-12,
            "score {diluted_score} expected {expected}"
        );
        assert!(diluted_score < focused_score);
    }

    #[test]
    fn test_unmatched_interests_lower_the_score() {
        let user = profile(Some(TraitVector::new(1.0, 0.0, 0.0, 0.0, 0.0)), &[], &[]);
        let vector = Some(TraitVector::new(0.2, 0.4, 0.4, 0.0, 0.0));
        let bare = match_score(&user, &career(vector, &[], &[]));
        let with_interests = match_score(
            &user,
            &career(vector, &["creativity", "design"], &["Figma"]),
        );
        assert!(with_interests < bare);
    }

    #[test]
    fn test_skill_labels_normalized_before_lookup() {
        let c = career(None, &[], &["Project Management"]);

        let user = profile(None, &[], &[("project_management", 1)]);
        assert!(match_score(&user, &c) > 0.0);

        let miss = profile(None, &[], &[("project management", 1)]);
        assert_eq!(match_score(&miss, &c), 0.0);
    }

    #[test]
    fn test_score_bounded_for_mixed_inputs() {
        let users = [
            profile(
                Some(TraitVector::new(1.0, 1.0, 1.0, 1.0, 1.0)),
                &[("technology", 5)],
                &[("programming", 9)],
            ),
            profile(Some(TraitVector::new(0.2, 0.2, 0.2, 0.2, 0.2)), &[], &[]),
            profile(None, &[("creativity", 1)], &[("design", 1)]),
        ];
        let careers = [
            career(
                Some(ux_vector()),
                &["creativity", "technology"],
                &["Programming", "Design"],
            ),
            career(Some(TraitVector::new(0.0, 0.0, 0.0, 0.0, 0.0)), &[], &[]),
            career(None, &["creativity"], &[]),
        ];
        for user in &users {
            for c in &careers {
                let score = match_score(user, c);
                assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
            }
        }
    }

    #[test]
    fn test_normalize_skill_label() {
        assert_eq!(normalize_skill_label("Python/R"), "python_r");
        assert_eq!(normalize_skill_label("SEO/SEM"), "seo_sem");
        assert_eq!(normalize_skill_label("Programming"), "programming");
    }

    #[test]
    fn test_scorer_trait_delegates() {
        let scorer = WeightedCosineScorer::default();
        let user = profile(Some(ux_vector()), &[], &[]);
        let c = career(Some(ux_vector()), &[], &[]);
        assert_eq!(scorer.score(&user, &c), match_score(&user, &c));
    }
}
