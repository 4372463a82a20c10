use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HealthState;

/// A sanitary sample taken from an animal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HealthRecord {
    pub id: String,
    pub animal_id: String,
    pub test_type: Option<String>,
    pub state: HealthState,
    pub result: Option<String>,
    pub sampled_at: Option<DateTime<Utc>>,
    pub laboratory: Option<String>,
    pub exam_cost: Option<f64>,
}
