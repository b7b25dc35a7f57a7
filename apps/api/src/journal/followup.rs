//! Work that runs after a journal entry is created, detached from the request.
//!
//! Analysis runs first so the regeneration that follows sees the new entry's
//! themes and skills. Failures are logged and dropped; nothing is retried.

use tracing::{debug, error};

use crate::analysis::signals::{analyze_entry, TextSignals};
use crate::errors::AppError;
use crate::models::journal::JournalEntry;
use crate::recommendation::generator::generate_recommendations;
use crate::state::AppState;
use crate::store::Store;

/// Fire-and-forget: the caller never waits on, or learns about, the outcome.
pub fn spawn_entry_followups(state: AppState, entry: JournalEntry) {
    tokio::spawn(async move {
        run_entry_followups(&state, &entry).await;
    });
}

pub async fn run_entry_followups(state: &AppState, entry: &JournalEntry) {
    match analyze_and_store(state.store.as_ref(), entry).await {
        Ok(signals) => debug!(
            "Analyzed journal entry {}: {} keywords, themes {:?}, skills {:?}",
            entry.id,
            signals.keywords.len(),
            signals.themes,
            signals.skills
        ),
        Err(e) => error!("Error analyzing journal entry {}: {e}", entry.id),
    }

    match generate_recommendations(
        state.store.as_ref(),
        state.scorer.as_ref(),
        state.generation_settings(),
        entry.user_id,
    )
    .await
    {
        Ok(outcome) => debug!(
            "Recommendation refresh after entry {}: {outcome:?}",
            entry.id
        ),
        Err(e) => error!(
            "Error regenerating recommendations for user {}: {e}",
            entry.user_id
        ),
    }
}

/// Extracts signals from the entry text and writes them back onto the entry.
pub async fn analyze_and_store(
    store: &dyn Store,
    entry: &JournalEntry,
) -> Result<TextSignals, AppError> {
    let signals = analyze_entry(entry);
    store
        .update_journal_entry_analysis(
            entry.id,
            &signals.keywords,
            &signals.themes,
            &signals.skills,
        )
        .await?;
    Ok(signals)
}
