use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Feed and water availability observed on a land plot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResourceLog {
    pub id: i64,
    pub land_id: i64,
    pub feed_available: f64,
    pub water_available: f64,
    pub logged_at: DateTime<Utc>,
}
