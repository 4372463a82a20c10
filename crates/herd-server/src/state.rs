use std::sync::Arc;

use herd_config::AnalyticsConfig;
use herd_db::HerdDb;

/// Shared handler state: the entity store and classification thresholds.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<HerdDb>,
    pub thresholds: AnalyticsConfig,
}

impl AppState {
    #[must_use]
    pub fn new(db: HerdDb, thresholds: AnalyticsConfig) -> Self {
        Self {
            db: Arc::new(db),
            thresholds,
        }
    }
}
