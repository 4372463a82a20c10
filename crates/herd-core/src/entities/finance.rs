use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FinanceLog {
    pub id: i64,
    pub animal_id: String,
    pub feed_cost: f64,
    pub medical_cost: f64,
    pub sale_revenue: f64,
    pub logged_at: DateTime<Utc>,
}
