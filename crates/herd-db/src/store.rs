//! [`AnalyticsStore`] over the libSQL repos.
//!
//! Each method delegates to the inherent repo method of the same name and
//! folds `DatabaseError` into the store-level `StoreError`.

use herd_core::entities::{Animal, CarcassWeighing, Farm, HealthRecord, Land, ResourceLog, WeightLog};
use herd_core::errors::StoreError;
use herd_core::store::{AnalyticsStore, CarcassSummary, FinanceTotals};

use crate::HerdDb;
use crate::error::DatabaseError;

fn to_store_error(op: &'static str, error: DatabaseError) -> StoreError {
    tracing::warn!(op, %error, "store query failed");
    error.into()
}

impl AnalyticsStore for HerdDb {
    async fn get_farm(&self, farm_id: i64) -> Result<Option<Farm>, StoreError> {
        Self::get_farm(self, farm_id)
            .await
            .map_err(|e| to_store_error("get_farm", e))
    }

    async fn get_land(&self, land_id: i64) -> Result<Option<Land>, StoreError> {
        Self::get_land(self, land_id)
            .await
            .map_err(|e| to_store_error("get_land", e))
    }

    async fn get_animal(&self, animal_id: &str) -> Result<Option<Animal>, StoreError> {
        Self::get_animal(self, animal_id)
            .await
            .map_err(|e| to_store_error("get_animal", e))
    }

    async fn latest_weight(&self, animal_id: &str) -> Result<Option<WeightLog>, StoreError> {
        Self::latest_weight(self, animal_id)
            .await
            .map_err(|e| to_store_error("latest_weight", e))
    }

    async fn latest_health(&self, animal_id: &str) -> Result<Option<HealthRecord>, StoreError> {
        Self::latest_health(self, animal_id)
            .await
            .map_err(|e| to_store_error("latest_health", e))
    }

    async fn emission_total(&self, animal_id: &str) -> Result<f64, StoreError> {
        Self::emission_total(self, animal_id)
            .await
            .map_err(|e| to_store_error("emission_total", e))
    }

    async fn finance_totals(&self, animal_id: &str) -> Result<FinanceTotals, StoreError> {
        Self::finance_totals(self, animal_id)
            .await
            .map_err(|e| to_store_error("finance_totals", e))
    }

    async fn carcass_for_animal(
        &self,
        animal_id: &str,
    ) -> Result<Option<CarcassWeighing>, StoreError> {
        Self::carcass_for_animal(self, animal_id)
            .await
            .map_err(|e| to_store_error("carcass_for_animal", e))
    }

    async fn latest_resource(&self, land_id: i64) -> Result<Option<ResourceLog>, StoreError> {
        Self::latest_resource(self, land_id)
            .await
            .map_err(|e| to_store_error("latest_resource", e))
    }

    async fn count_animals_on_land(&self, land_id: i64) -> Result<u64, StoreError> {
        Self::count_animals_on_land(self, land_id)
            .await
            .map_err(|e| to_store_error("count_animals_on_land", e))
    }

    async fn land_carcass_total(&self, land_id: i64) -> Result<f64, StoreError> {
        Self::land_carcass_total(self, land_id)
            .await
            .map_err(|e| to_store_error("land_carcass_total", e))
    }

    async fn land_mean_weights(&self, land_id: i64) -> Result<Vec<f64>, StoreError> {
        Self::land_mean_weights(self, land_id)
            .await
            .map_err(|e| to_store_error("land_mean_weights", e))
    }

    async fn lands_for_farm(&self, farm_id: i64) -> Result<Vec<Land>, StoreError> {
        Self::lands_for_farm(self, farm_id)
            .await
            .map_err(|e| to_store_error("lands_for_farm", e))
    }

    async fn farm_carcass_summary(&self, farm_id: i64) -> Result<CarcassSummary, StoreError> {
        Self::farm_carcass_summary(self, farm_id)
            .await
            .map_err(|e| to_store_error("farm_carcass_summary", e))
    }
}
