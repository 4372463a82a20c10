//! Shared test utilities for herd-db unit tests.

pub(crate) mod helpers {
    use chrono::{DateTime, Utc};
    use herd_core::entities::{Animal, CarcassWeighing, Farm, HealthRecord, Land};
    use herd_core::enums::HealthState;

    use crate::HerdDb;

    /// Create an in-memory database with the schema applied.
    pub async fn test_db() -> HerdDb {
        HerdDb::open_local(":memory:").await.unwrap()
    }

    pub async fn seed_farm(db: &HerdDb, id: i64) {
        let farm = Farm {
            id,
            name: Some(format!("Farm {id}")),
            department: None,
            municipality: None,
            area_ha: None,
            owner: None,
            registered_at: None,
        };
        db.insert_farm(&farm).await.unwrap();
    }

    pub async fn seed_land(db: &HerdDb, id: i64, farm_id: i64) {
        let land = Land {
            id,
            farm_id,
            name: Some(format!("Lot {id}")),
            area_ha: None,
            activity: None,
        };
        db.insert_land(&land).await.unwrap();
    }

    pub async fn seed_animal(db: &HerdDb, id: &str, farm_id: i64, land_id: i64) {
        db.insert_animal(&animal(id, farm_id, land_id)).await.unwrap();
    }

    /// An animal with only its identity and placement set.
    pub fn animal(id: &str, farm_id: i64, land_id: i64) -> Animal {
        Animal {
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
        }
    }

    pub fn health(
        id: &str,
        animal_id: &str,
        state: HealthState,
        sampled_at: Option<DateTime<Utc>>,
    ) -> HealthRecord {
        HealthRecord {
            id: id.to_string(),
            animal_id: animal_id.to_string(),
            test_type: None,
            state,
            result: None,
            sampled_at,
            laboratory: None,
            exam_cost: None,
        }
    }

    pub fn carcass(
        id: &str,
        animal_id: &str,
        carcass_weight_kg: Option<f64>,
        yield_percentage: Option<f64>,
    ) -> CarcassWeighing {
        CarcassWeighing {
            id: id.to_string(),
            animal_id: animal_id.to_string(),
            slaughtered_at: None,
            live_weight_kg: None,
            carcass_weight_kg,
            yield_percentage,
            plant: None,
        }
    }
}
