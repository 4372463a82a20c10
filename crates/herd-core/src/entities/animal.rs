use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tracked livestock unit. Belongs to exactly one land and one farm.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Animal {
    pub id: String,
    pub farm_id: i64,
    pub land_id: i64,
    pub sex: Option<String>,
    pub breed: Option<String>,
    pub born_at: Option<DateTime<Utc>>,
    /// Lifecycle status, set externally (never derived here).
    pub lifecycle_status: Option<String>,
    pub dam_id: Option<String>,
    pub sire_id: Option<String>,
    /// Where the animal came from (born on farm, purchase, ...).
    pub origin: Option<String>,
    /// Production purpose, e.g. fattening or breeding.
    pub purpose: Option<String>,
}
