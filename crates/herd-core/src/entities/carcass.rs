use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Post-slaughter measurement of an animal.
///
/// Weights and yield are nullable in the store; sums and averages skip nulls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CarcassWeighing {
    pub id: String,
    pub animal_id: String,
    pub slaughtered_at: Option<DateTime<Utc>>,
    pub live_weight_kg: Option<f64>,
    pub carcass_weight_kg: Option<f64>,
    pub yield_percentage: Option<f64>,
    pub plant: Option<String>,
}
