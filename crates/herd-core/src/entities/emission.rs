use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EmissionLog {
    pub id: i64,
    pub animal_id: String,
    pub co2: f64,
    pub methane: f64,
    pub logged_at: DateTime<Utc>,
}
