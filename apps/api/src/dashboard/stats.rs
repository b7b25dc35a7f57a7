use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::journal::JournalEntry;
use crate::models::recommendation::RecommendationWithCareer;

pub const TOP_RECOMMENDATIONS_SHOWN: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub assessment_complete: bool,
    pub journal_entry_count: usize,
    pub journal_streak: u32,
    pub top_recommendations: Vec<RecommendationWithCareer>,
    pub overall_progress: u8,
}

/// Consecutive-day journaling streak ending today.
///
/// Walking entries newest first, the i-th entry (from 0) must be exactly
/// i whole days old. Two entries on the same day therefore end the streak.
pub fn journal_streak(entries: &[JournalEntry], now: DateTime<Utc>) -> u32 {
    let mut created: Vec<DateTime<Utc>> = entries.iter().map(|e| e.created_at).collect();
    created.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    for (expected_days, at) in created.iter().enumerate() {
        if (now - *at).num_days() != expected_days as i64 {
            break;
        }
        streak += 1;
    }
    streak
}

/// 40 for a completed assessment, then 20 each at 1, 5 and 10 journal entries.
pub fn overall_progress(assessment_complete: bool, journal_entry_count: usize) -> u8 {
    let mut progress: u8 = if assessment_complete { 40 } else { 0 };
    for threshold in [1, 5, 10] {
        if journal_entry_count >= threshold {
            progress += 20;
        }
    }
    progress.min(100)
}

pub fn build_dashboard_stats(
    assessment_complete: bool,
    entries: &[JournalEntry],
    mut recommendations: Vec<RecommendationWithCareer>,
    now: DateTime<Utc>,
) -> DashboardStats {
    recommendations.truncate(TOP_RECOMMENDATIONS_SHOWN);
    DashboardStats {
        assessment_complete,
        journal_entry_count: entries.len(),
        journal_streak: journal_streak(entries, now),
        top_recommendations: recommendations,
        overall_progress: overall_progress(assessment_complete, entries.len()),
    }
}
