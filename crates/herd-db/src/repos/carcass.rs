//! Carcass weighing repository.

use herd_core::entities::CarcassWeighing;
use herd_core::store::CarcassSummary;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_datetime, get_opt_string};

fn row_to_carcass(row: &libsql::Row) -> Result<CarcassWeighing, DatabaseError> {
    Ok(CarcassWeighing {
        id: row.get::<String>(0)?,
        animal_id: row.get::<String>(1)?,
        slaughtered_at: get_opt_datetime(row, 2)?,
        live_weight_kg: row.get::<Option<f64>>(3)?,
        carcass_weight_kg: row.get::<Option<f64>>(4)?,
        yield_percentage: row.get::<Option<f64>>(5)?,
        plant: get_opt_string(row, 6)?,
    })
}

impl HerdDb {
    pub async fn insert_carcass(&self, carcass: &CarcassWeighing) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO carcass_weighings (id, animal_id, slaughtered_at, live_weight_kg, carcass_weight_kg, yield_percentage, plant)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    carcass.id.as_str(),
                    carcass.animal_id.as_str(),
                    carcass.slaughtered_at.map(|t| t.to_rfc3339()),
                    carcass.live_weight_kg,
                    carcass.carcass_weight_kg,
                    carcass.yield_percentage,
                    carcass.plant.as_deref()
                ],
            )
            .await?;
        Ok(())
    }

    /// First carcass weighing recorded for an animal (lowest rowid).
    pub async fn carcass_for_animal(
        &self,
        animal_id: &str,
    ) -> Result<Option<CarcassWeighing>, DatabaseError> {
        let row = self
            .query_opt(
                "SELECT id, animal_id, slaughtered_at, live_weight_kg, carcass_weight_kg, yield_percentage, plant
                 FROM carcass_weighings WHERE animal_id = ?1
                 ORDER BY rowid LIMIT 1",
                [animal_id],
            )
            .await?;
        row.as_ref().map(row_to_carcass).transpose()
    }

    /// Σ carcass weight for animals currently assigned to `land_id`.
    pub async fn land_carcass_total(&self, land_id: i64) -> Result<f64, DatabaseError> {
        let row = self
            .query_one(
                "SELECT CAST(COALESCE(SUM(carcass_weight_kg), 0) AS REAL) FROM carcass_weighings
                 WHERE animal_id IN (SELECT id FROM animals WHERE land_id = ?1)",
                [land_id],
            )
            .await?;
        Ok(row.get::<f64>(0)?)
    }

    /// Carcass weight total and mean yield for animals of `farm_id`.
    pub async fn farm_carcass_summary(&self, farm_id: i64) -> Result<CarcassSummary, DatabaseError> {
        let row = self
            .query_one(
                "SELECT CAST(COALESCE(SUM(carcass_weight_kg), 0) AS REAL), AVG(yield_percentage)
                 FROM carcass_weighings
                 WHERE animal_id IN (SELECT id FROM animals WHERE farm_id = ?1)",
                [farm_id],
            )
            .await?;
        Ok(CarcassSummary {
            total_carcass_kg: row.get::<f64>(0)?,
            average_yield: row.get::<Option<f64>>(1)?,
        })
    }
}
