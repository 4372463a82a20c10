use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level landholding. Owns lands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Farm {
    pub id: i64,
    pub name: Option<String>,
    pub department: Option<String>,
    pub municipality: Option<String>,
    pub area_ha: Option<f64>,
    pub owner: Option<String>,
    pub registered_at: Option<DateTime<Utc>>,
}
