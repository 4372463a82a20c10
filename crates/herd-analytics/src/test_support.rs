//! In-memory [`AnalyticsStore`] fakes for evaluator tests.

use chrono::{DateTime, TimeZone, Utc};
use herd_core::entities::{
    Animal, CarcassWeighing, EmissionLog, Farm, FinanceLog, HealthRecord, Land, ResourceLog,
    WeightLog,
};
use herd_core::enums::HealthState;
use herd_core::errors::StoreError;
use herd_core::store::{AnalyticsStore, CarcassSummary, FinanceTotals};

/// Midnight on the given day of January 2024.
pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

/// Vectors of rows; position in a vector stands in for the surrogate key.
#[derive(Default)]
pub struct MemoryStore {
    farms: Vec<Farm>,
    lands: Vec<Land>,
    animals: Vec<Animal>,
    weights: Vec<WeightLog>,
    health: Vec<HealthRecord>,
    emissions: Vec<EmissionLog>,
    finances: Vec<FinanceLog>,
    carcasses: Vec<CarcassWeighing>,
    resources: Vec<ResourceLog>,
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).unwrap() + 1
}

impl MemoryStore {
    pub fn add_farm(&mut self, id: i64) {
        self.farms.push(Farm {
            id,
            name: None,
            department: None,
            municipality: None,
            area_ha: None,
            owner: None,
            registered_at: None,
        });
    }

    pub fn add_land(&mut self, id: i64, farm_id: i64) {
        self.lands.push(Land {
            id,
            farm_id,
            name: None,
            area_ha: None,
            activity: None,
        });
    }

    pub fn add_animal(&mut self, id: &str, farm_id: i64, land_id: i64) {
        self.animals.push(Animal {
            id: id.to_string(),
            farm_id,
            land_id,
            sex: None,
            breed: None,
            born_at: None,
            lifecycle_status: None,
            dam_id: None,
            sire_id: None,
            origin: None,
            purpose: None,
        });
    }

    pub fn add_weight(&mut self, animal_id: &str, weight_kg: f64, measured_at: DateTime<Utc>) {
        self.weights.push(WeightLog {
            id: next_id(self.weights.len()),
            animal_id: animal_id.to_string(),
            weight_kg,
            measured_at,
        });
    }

    pub fn add_health(
        &mut self,
        animal_id: &str,
        state: HealthState,
        sampled_at: Option<DateTime<Utc>>,
    ) {
        self.health.push(HealthRecord {
            id: format!("H-{}", self.health.len() + 1),
            animal_id: animal_id.to_string(),
            test_type: None,
            state,
            result: None,
            sampled_at,
            laboratory: None,
            exam_cost: None,
        });
    }

    pub fn add_emission(&mut self, animal_id: &str, co2: f64, methane: f64) {
        self.emissions.push(EmissionLog {
            id: next_id(self.emissions.len()),
            animal_id: animal_id.to_string(),
            co2,
            methane,
            logged_at: at(1),
        });
    }

    pub fn add_finance(&mut self, animal_id: &str, feed_cost: f64, medical_cost: f64, sale_revenue: f64) {
        self.finances.push(FinanceLog {
            id: next_id(self.finances.len()),
            animal_id: animal_id.to_string(),
            feed_cost,
            medical_cost,
            sale_revenue,
            logged_at: at(1),
        });
    }

    pub fn add_carcass(
        &mut self,
        animal_id: &str,
        carcass_weight_kg: Option<f64>,
        live_weight_kg: Option<f64>,
        yield_percentage: Option<f64>,
        slaughtered_at: Option<DateTime<Utc>>,
    ) {
        self.carcasses.push(CarcassWeighing {
            id: format!("C-{}", self.carcasses.len() + 1),
            animal_id: animal_id.to_string(),
            slaughtered_at,
            live_weight_kg,
            carcass_weight_kg,
            yield_percentage,
            plant: None,
        });
    }

    pub fn add_resource(&mut self, land_id: i64, feed: f64, water: f64, logged_at: DateTime<Utc>) {
        self.resources.push(ResourceLog {
            id: next_id(self.resources.len()),
            land_id,
            feed_available: feed,
            water_available: water,
            logged_at,
        });
    }

    fn animal_ids_where(&self, keep: impl Fn(&Animal) -> bool) -> Vec<&str> {
        self.animals
            .iter()
            .filter(|a| keep(a))
            .map(|a| a.id.as_str())
            .collect()
    }

    fn carcasses_of(&self, animal_ids: &[&str]) -> impl Iterator<Item = &CarcassWeighing> {
        self.carcasses
            .iter()
            .filter(move |c| animal_ids.contains(&c.animal_id.as_str()))
    }
}

impl AnalyticsStore for MemoryStore {
    async fn get_farm(&self, farm_id: i64) -> Result<Option<Farm>, StoreError> {
        Ok(self.farms.iter().find(|f| f.id == farm_id).cloned())
    }

    async fn get_land(&self, land_id: i64) -> Result<Option<Land>, StoreError> {
        Ok(self.lands.iter().find(|l| l.id == land_id).cloned())
    }

    async fn get_animal(&self, animal_id: &str) -> Result<Option<Animal>, StoreError> {
        Ok(self.animals.iter().find(|a| a.id == animal_id).cloned())
    }

    async fn latest_weight(&self, animal_id: &str) -> Result<Option<WeightLog>, StoreError> {
        Ok(self
            .weights
            .iter()
            .filter(|w| w.animal_id == animal_id)
            .max_by_key(|w| (w.measured_at, w.id))
            .cloned())
    }

    async fn latest_health(&self, animal_id: &str) -> Result<Option<HealthRecord>, StoreError> {
        Ok(self
            .health
            .iter()
            .enumerate()
            .filter(|(_, h)| h.animal_id == animal_id)
            .max_by_key(|(idx, h)| (h.sampled_at, *idx))
            .map(|(_, h)| h.clone()))
    }

    async fn emission_total(&self, animal_id: &str) -> Result<f64, StoreError> {
        Ok(self
            .emissions
            .iter()
            .filter(|e| e.animal_id == animal_id)
            .map(|e| e.co2 + e.methane)
            .sum())
    }

    async fn finance_totals(&self, animal_id: &str) -> Result<FinanceTotals, StoreError> {
        Ok(self
            .finances
            .iter()
            .filter(|f| f.animal_id == animal_id)
            .fold(FinanceTotals::default(), |acc, f| FinanceTotals {
                costs: acc.costs + f.feed_cost + f.medical_cost,
                revenue: acc.revenue + f.sale_revenue,
            }))
    }

    async fn carcass_for_animal(
        &self,
        animal_id: &str,
    ) -> Result<Option<CarcassWeighing>, StoreError> {
        Ok(self
            .carcasses
            .iter()
            .find(|c| c.animal_id == animal_id)
            .cloned())
    }

    async fn latest_resource(&self, land_id: i64) -> Result<Option<ResourceLog>, StoreError> {
        Ok(self
            .resources
            .iter()
            .filter(|r| r.land_id == land_id)
            .max_by_key(|r| (r.logged_at, r.id))
            .cloned())
    }

    async fn count_animals_on_land(&self, land_id: i64) -> Result<u64, StoreError> {
        Ok(self.animals.iter().filter(|a| a.land_id == land_id).count() as u64)
    }

    async fn land_carcass_total(&self, land_id: i64) -> Result<f64, StoreError> {
        let ids = self.animal_ids_where(|a| a.land_id == land_id);
        Ok(self
            .carcasses_of(&ids)
            .filter_map(|c| c.carcass_weight_kg)
            .sum())
    }

    #[allow(clippy::cast_precision_loss)]
    async fn land_mean_weights(&self, land_id: i64) -> Result<Vec<f64>, StoreError> {
        let mut ids = self.animal_ids_where(|a| a.land_id == land_id);
        ids.sort_unstable();
        Ok(ids
            .into_iter()
            .filter_map(|id| {
                let weights: Vec<f64> = self
                    .weights
                    .iter()
                    .filter(|w| w.animal_id == id)
                    .map(|w| w.weight_kg)
                    .collect();
                (!weights.is_empty())
                    .then(|| weights.iter().sum::<f64>() / weights.len() as f64)
            })
            .collect())
    }

    async fn lands_for_farm(&self, farm_id: i64) -> Result<Vec<Land>, StoreError> {
        let mut lands: Vec<Land> = self
            .lands
            .iter()
            .filter(|l| l.farm_id == farm_id)
            .cloned()
            .collect();
        lands.sort_by_key(|l| l.id);
        Ok(lands)
    }

    #[allow(clippy::cast_precision_loss)]
    async fn farm_carcass_summary(&self, farm_id: i64) -> Result<CarcassSummary, StoreError> {
        let ids = self.animal_ids_where(|a| a.farm_id == farm_id);
        let rows: Vec<&CarcassWeighing> = self.carcasses_of(&ids).collect();
        let yields: Vec<f64> = rows.iter().filter_map(|c| c.yield_percentage).collect();
        Ok(CarcassSummary {
            total_carcass_kg: rows.iter().filter_map(|c| c.carcass_weight_kg).sum(),
            average_yield: (!yields.is_empty())
                .then(|| yields.iter().sum::<f64>() / yields.len() as f64),
        })
    }
}

/// A store whose every query fails as if the database were down.
pub struct FailingStore;

fn down<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable("database is down".into()))
}

impl AnalyticsStore for FailingStore {
    async fn get_farm(&self, _: i64) -> Result<Option<Farm>, StoreError> {
        down()
    }

    async fn get_land(&self, _: i64) -> Result<Option<Land>, StoreError> {
        down()
    }

    async fn get_animal(&self, _: &str) -> Result<Option<Animal>, StoreError> {
        down()
    }

    async fn latest_weight(&self, _: &str) -> Result<Option<WeightLog>, StoreError> {
        down()
    }

    async fn latest_health(&self, _: &str) -> Result<Option<HealthRecord>, StoreError> {
        down()
    }

    async fn emission_total(&self, _: &str) -> Result<f64, StoreError> {
        down()
    }

    async fn finance_totals(&self, _: &str) -> Result<FinanceTotals, StoreError> {
        down()
    }

    async fn carcass_for_animal(&self, _: &str) -> Result<Option<CarcassWeighing>, StoreError> {
        down()
    }

    async fn latest_resource(&self, _: i64) -> Result<Option<ResourceLog>, StoreError> {
        down()
    }

    async fn count_animals_on_land(&self, _: i64) -> Result<u64, StoreError> {
        down()
    }

    async fn land_carcass_total(&self, _: i64) -> Result<f64, StoreError> {
        down()
    }

    async fn land_mean_weights(&self, _: i64) -> Result<Vec<f64>, StoreError> {
        down()
    }

    async fn lands_for_farm(&self, _: i64) -> Result<Vec<Land>, StoreError> {
        down()
    }

    async fn farm_carcass_summary(&self, _: i64) -> Result<CarcassSummary, StoreError> {
        down()
    }
}
