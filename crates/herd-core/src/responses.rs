//! Analytics response records.
//!
//! These structs define the JSON shape returned by the analytics endpoints
//! and by `herd animal|land|farm`. Nullable fields always serialize
//! (as `null`); none are skipped.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AnimalStatus, FarmStatus, LandStatus, ResourceKind};

/// Slaughter figures for an animal that has a carcass weighing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MeatYield {
    pub carcass_weight_kg: Option<f64>,
    pub live_weight_kg: Option<f64>,
    pub yield_percentage: Option<f64>,
    pub slaughter_date: Option<DateTime<Utc>>,
}

/// Derived status and per-animal totals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnimalAnalytics {
    pub animal_id: String,
    pub status: AnimalStatus,
    pub latest_weight: Option<f64>,
    pub total_emissions: f64,
    pub total_costs: f64,
    pub total_revenue: f64,
    /// Placeholder linear estimate: latest weight × 0.5.
    pub energy_consumption: f64,
    pub meat_yield: Option<MeatYield>,
}

/// Derived resource status and roll-ups for one land plot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LandAnalytics {
    pub land_id: i64,
    pub status: LandStatus,
    pub low_resources: Vec<ResourceKind>,
    pub animal_count: u64,
    pub latest_feed: Option<f64>,
    pub latest_water: Option<f64>,
    pub total_meat_produced_kg: f64,
    pub avg_daily_weight_gain_kg: f64,
}

impl LandAnalytics {
    /// Whether any resource on this land is under its threshold.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        !self.low_resources.is_empty()
    }
}

/// Farm-wide status folded from its lands plus farm-scoped carcass aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FarmAnalytics {
    pub farm_id: i64,
    pub status: FarmStatus,
    pub total_lands: u64,
    pub total_animals: u64,
    pub total_meat_production_kg: f64,
    pub average_carcass_yield_percent: f64,
    pub lands_status: Vec<LandAnalytics>,
}
