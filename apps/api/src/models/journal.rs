use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Frustrated,
    Tired,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Frustrated => "frustrated",
            Mood::Tired => "tired",
        }
    }
}

/// A daily journal entry. The tag lists stay `None` until analysis has run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: Option<String>,
    pub enjoyed: Option<String>,
    pub challenges: Option<String>,
    pub learned: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub themes: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// The three free-text fields joined with single spaces; absent fields become empty.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.enjoyed.as_deref().unwrap_or_default(),
            self.challenges.as_deref().unwrap_or_default(),
            self.learned.as_deref().unwrap_or_default()
        )
    }
}

/// Validated input for a new entry.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub user_id: Uuid,
    pub mood: Option<Mood>,
    pub enjoyed: Option<String>,
    pub challenges: Option<String>,
    pub learned: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text_handles_missing_fields() {
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            mood: Some(Mood::Happy.as_str().to_string()),
            enjoyed: Some("Painting".to_string()),
            challenges: None,
            learned: Some("patience".to_string()),
            keywords: None,
            themes: None,
            skills: None,
            created_at: Utc::now(),
        };
        assert_eq!(entry.combined_text(), "Painting  patience");
    }

    #[test]
    fn test_mood_deserializes_snake_case() {
        let mood: Mood = serde_json::from_str("\"frustrated\"").unwrap();
        assert_eq!(mood, Mood::Frustrated);
        assert!(serde_json::from_str::<Mood>("\"ecstatic\"").is_err());
    }
}
