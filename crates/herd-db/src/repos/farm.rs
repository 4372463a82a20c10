//! Farm repository.

use herd_core::entities::Farm;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_datetime, get_opt_string};

fn row_to_farm(row: &libsql::Row) -> Result<Farm, DatabaseError> {
    Ok(Farm {
        id: row.get::<i64>(0)?,
        name: get_opt_string(row, 1)?,
        department: get_opt_string(row, 2)?,
        municipality: get_opt_string(row, 3)?,
        area_ha: row.get::<Option<f64>>(4)?,
        owner: get_opt_string(row, 5)?,
        registered_at: get_opt_datetime(row, 6)?,
    })
}

impl HerdDb {
    pub async fn insert_farm(&self, farm: &Farm) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO farms (id, name, department, municipality, area_ha, owner, registered_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    farm.id,
                    farm.name.as_deref(),
                    farm.department.as_deref(),
                    farm.municipality.as_deref(),
                    farm.area_ha,
                    farm.owner.as_deref(),
                    farm.registered_at.map(|t| t.to_rfc3339())
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_farm(&self, id: i64) -> Result<Option<Farm>, DatabaseError> {
        let row = self
            .query_opt(
                "SELECT id, name, department, municipality, area_ha, owner, registered_at
                 FROM farms WHERE id = ?1",
                [id],
            )
            .await?;
        row.as_ref().map(row_to_farm).transpose()
    }
}
