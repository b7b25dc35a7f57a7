use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::generator::GenerationSettings;
use crate::recommendation::scoring::CareerScorer;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres in production, in-memory when no `DATABASE_URL` is configured.
    pub store: Arc<dyn Store>,
    /// Pluggable career scorer. Default: WeightedCosineScorer.
    pub scorer: Arc<dyn CareerScorer>,
    pub config: Config,
}

impl AppState {
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            history_limit: self.config.journal_history_limit,
            top_n: self.config.recommendation_limit,
        }
    }
}
