use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Transfer of an animal between farms or lands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Movement {
    pub id: String,
    pub animal_id: String,
    pub kind: Option<String>,
    pub moved_at: Option<DateTime<Utc>>,
    pub origin_farm: Option<String>,
    pub origin_land: Option<String>,
    pub destination_farm: Option<String>,
    pub destination_land: Option<String>,
    pub reason: Option<String>,
}
