use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Subdivision of a farm. Owns animals and resource logs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Land {
    pub id: i64,
    pub farm_id: i64,
    pub name: Option<String>,
    pub area_ha: Option<f64>,
    /// Current livestock activity on the plot.
    pub activity: Option<String>,
}
