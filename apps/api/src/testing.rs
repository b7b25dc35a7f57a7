//! Shared fixtures for handler and follow-up tests.

use std::sync::Arc;

use crate::careers::seed::seed_catalog_if_empty;
use crate::config::Config;
use crate::recommendation::scoring::WeightedCosineScorer;
use crate::state::AppState;
use crate::store::MemoryStore;

/// In-memory state with the default career catalog loaded.
pub async fn seeded_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    seed_catalog_if_empty(store.as_ref())
        .await
        .expect("seeding the memory store cannot fail");
    AppState {
        store,
        scorer: Arc::new(WeightedCosineScorer::default()),
        config: Config::default(),
    }
}
