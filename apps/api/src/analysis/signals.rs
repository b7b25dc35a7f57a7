use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::patterns::{matching_labels, SKILL_MATCHERS, THEME_MATCHERS};
use crate::models::journal::JournalEntry;

const MAX_KEYWORDS: usize = 10;
const MIN_KEYWORD_CHARS: usize = 4;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "i", "me", "my",
    "myself", "we", "us", "our", "you", "your", "have", "had", "do", "does", "did", "can", "could",
    "should", "would", "may", "might",
];

/// Everything the analyzer derives from one journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSignals {
    pub keywords: Vec<String>,
    pub themes: Vec<String>,
    pub skills: Vec<String>,
}

pub fn analyze_entry(entry: &JournalEntry) -> TextSignals {
    analyze_text(&entry.combined_text())
}

pub fn analyze_text(text: &str) -> TextSignals {
    let folded = text.to_lowercase();
    TextSignals {
        keywords: extract_keywords(&folded),
        themes: extract_themes(&folded),
        skills: extract_skills(&folded),
    }
}

/// First ten non-stop-word tokens longer than three characters, then deduplicated.
///
/// The cap applies before deduplication, so a repeated word still uses up a slot.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_lowercase)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .take(MAX_KEYWORDS)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

pub fn extract_themes(text: &str) -> Vec<String> {
    matching_labels(&THEME_MATCHERS, text)
}

pub fn extract_skills(text: &str) -> Vec<String> {
    matching_labels(&SKILL_MATCHERS, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_drop_short_and_stop_words() {
        let keywords = extract_keywords("i really enjoyed the workshop with my team");
        assert_eq!(keywords, vec!["really", "enjoyed", "workshop", "team"]);
    }

    #[test]
    fn test_keywords_capped_at_ten_in_order() {
        let text = "alpha bravo charlie delta echoes foxtrot golfing hotel india juliet \
                    kilo lima mike november oscar papa quebec";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords.first().unwrap(), "alpha");
        assert_eq!(keywords.last().unwrap(), "juliet");
    }

    #[test]
    fn test_fifteen_distinct_words_yield_at_most_ten() {
        let words: Vec<String> = (0..15).map(|i| format!("word{i:02}")).collect();
        let keywords = extract_keywords(&words.join(" "));
        assert_eq!(keywords, words[..10].to_vec());
    }

    #[test]
    fn test_keywords_dedup_after_cap() {
        let keywords = extract_keywords("design design design code reviews today");
        assert_eq!(keywords, vec!["design", "code", "reviews", "today"]);
    }

    #[test]
    fn test_keywords_split_on_punctuation() {
        let keywords = extract_keywords("problem-solving, teamwork; deadlines!");
        assert_eq!(
            keywords,
            vec!["problem", "solving", "teamwork", "deadlines"]
        );
    }

    #[test]
    fn test_themes_in_table_order() {
        let themes = extract_themes("we learned to code together as a team");
        assert_eq!(
            themes,
            vec!["technology", "leadership", "learning", "collaboration"]
        );
    }

    #[test]
    fn test_skills_detected() {
        let skills = extract_skills("i wrote python and helped a customer");
        assert_eq!(skills, vec!["programming", "customer_service"]);
    }

    #[test]
    fn test_empty_text_yields_empty_signals() {
        assert_eq!(analyze_text(""), TextSignals::default());
        assert_eq!(analyze_text("   ...  "), TextSignals::default());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "Designed a new app UI, presented it to the client and mentored an intern.";
        let first = analyze_text(text);
        for _ in 0..5 {
            assert_eq!(analyze_text(text), first);
        }
        assert!(first.themes.contains(&"creativity".to_string()));
        assert!(first.skills.contains(&"design".to_string()));
    }

    #[test]
    fn test_analyze_text_case_folds() {
        let signals = analyze_text("TEAMWORK Matters");
        assert_eq!(signals.keywords, vec!["teamwork", "matters"]);
        assert!(signals.themes.contains(&"leadership".to_string()));
    }
}
