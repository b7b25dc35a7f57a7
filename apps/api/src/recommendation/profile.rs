use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::assessment::TraitVector;
use crate::models::journal::JournalEntry;

/// Scoring input for one user. Rebuilt on every generation run, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProfile {
    pub traits: Option<TraitVector>,
    pub theme_counts: BTreeMap<String, u32>,
    pub skill_counts: BTreeMap<String, u32>,
}

impl UserProfile {
    pub fn total_themes(&self) -> u32 {
        self.theme_counts.values().sum()
    }

    pub fn total_skills(&self) -> u32 {
        self.skill_counts.values().sum()
    }
}

/// Flattens themes and skills across `entries` into occurrence counts.
/// Entries that have not been analyzed yet contribute nothing.
pub fn build_user_profile(traits: Option<TraitVector>, entries: &[JournalEntry]) -> UserProfile {
    let mut theme_counts = BTreeMap::new();
    let mut skill_counts = BTreeMap::new();

    for entry in entries {
        for theme in entry.themes.iter().flatten() {
            *theme_counts.entry(theme.clone()).or_insert(0) += 1;
        }
        for skill in entry.skills.iter().flatten() {
            *skill_counts.entry(skill.clone()).or_insert(0) += 1;
        }
    }

    UserProfile {
        traits,
        theme_counts,
        skill_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn analyzed_entry(themes: &[&str], skills: &[&str]) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            mood: None,
            enjoyed: None,
            challenges: None,
            learned: None,
            keywords: Some(vec![]),
            themes: Some(themes.iter().map(|s| s.to_string()).collect()),
            skills: Some(skills.iter().map(|s| s.to_string()).collect()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_counts_accumulate_across_entries() {
        let entries = vec![
            analyzed_entry(&["technology", "learning"], &["programming"]),
            analyzed_entry(&["technology"], &["programming", "writing"]),
        ];
        let profile = build_user_profile(None, &entries);
        assert_eq!(profile.theme_counts["technology"], 2);
        assert_eq!(profile.theme_counts["learning"], 1);
        assert_eq!(profile.skill_counts["programming"], 2);
        assert_eq!(profile.total_themes(), 3);
        assert_eq!(profile.total_skills(), 3);
    }

    #[test]
    fn test_unanalyzed_entries_are_skipped() {
        let mut pending = analyzed_entry(&[], &[]);
        pending.themes = None;
        pending.skills = None;
        let profile = build_user_profile(Some(TraitVector::default()), &[pending]);
        assert!(profile.theme_counts.is_empty());
        assert!(profile.skill_counts.is_empty());
        assert_eq!(profile.traits, Some(TraitVector::default()));
    }

    #[test]
    fn test_same_input_same_profile() {
        let entry = analyzed_entry(&["helping", "communication"], &["teaching"]);
        let entries = vec![entry];
        let traits = Some(TraitVector::new(0.5, 0.5, 0.5, 0.5, 0.5));
        assert_eq!(
            build_user_profile(traits, &entries),
            build_user_profile(traits, &entries)
        );
    }
}
