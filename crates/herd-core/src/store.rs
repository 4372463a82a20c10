//! Read-only store port consumed by the analytics evaluators.
//!
//! The evaluators receive an `&impl AnalyticsStore` instead of reaching for a
//! global connection. `herd-db` implements it over libSQL; tests implement it
//! over plain vectors.
//!
//! Ordering contract for the `latest_*` methods: rows are ordered by their
//! timestamp descending, and rows sharing the latest timestamp are broken by
//! the highest surrogate key (the most recently inserted row wins).

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::entities::{Animal, CarcassWeighing, Farm, HealthRecord, Land, ResourceLog, WeightLog};
use crate::errors::StoreError;

/// Summed finance log columns for one animal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceTotals {
    /// Σ (feed cost + medical cost).
    pub costs: f64,
    /// Σ sale revenue.
    pub revenue: f64,
}

/// Carcass aggregates over every animal of one farm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CarcassSummary {
    /// Σ carcass weight; `0.0` when there are no rows.
    pub total_carcass_kg: f64,
    /// Mean yield percentage, `None` when no row has a yield.
    pub average_yield: Option<f64>,
}

/// Query capabilities the evaluators need from the entity store.
pub trait AnalyticsStore: Sync {
    fn get_farm(&self, farm_id: i64)
    -> impl Future<Output = Result<Option<Farm>, StoreError>> + Send;

    fn get_land(&self, land_id: i64)
    -> impl Future<Output = Result<Option<Land>, StoreError>> + Send;

    fn get_animal(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<Option<Animal>, StoreError>> + Send;

    /// Most recent weighing of an animal.
    fn latest_weight(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<Option<WeightLog>, StoreError>> + Send;

    /// Most recent health sample of an animal.
    fn latest_health(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<Option<HealthRecord>, StoreError>> + Send;

    /// Σ (co2 + methane) over every emission log of an animal.
    fn emission_total(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<f64, StoreError>> + Send;

    fn finance_totals(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<FinanceTotals, StoreError>> + Send;

    /// First carcass weighing recorded for an animal (lowest surrogate key).
    fn carcass_for_animal(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<Option<CarcassWeighing>, StoreError>> + Send;

    /// Most recent resource observation on a land plot.
    fn latest_resource(
        &self,
        land_id: i64,
    ) -> impl Future<Output = Result<Option<ResourceLog>, StoreError>> + Send;

    fn count_animals_on_land(
        &self,
        land_id: i64,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Σ carcass weight for carcass rows whose animal is on `land_id`.
    fn land_carcass_total(
        &self,
        land_id: i64,
    ) -> impl Future<Output = Result<f64, StoreError>> + Send;

    /// Mean logged weight of each animal on `land_id` that has weight logs,
    /// ordered by animal id.
    fn land_mean_weights(
        &self,
        land_id: i64,
    ) -> impl Future<Output = Result<Vec<f64>, StoreError>> + Send;

    /// Lands of a farm ordered by land id.
    fn lands_for_farm(
        &self,
        farm_id: i64,
    ) -> impl Future<Output = Result<Vec<Land>, StoreError>> + Send;

    /// Carcass aggregates over animals whose farm is `farm_id`.
    fn farm_carcass_summary(
        &self,
        farm_id: i64,
    ) -> impl Future<Output = Result<CarcassSummary, StoreError>> + Send;
}
