use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One weighing of a live animal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeightLog {
    pub id: i64,
    pub animal_id: String,
    pub weight_kg: f64,
    pub measured_at: DateTime<Utc>,
}
