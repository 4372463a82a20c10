//! Land repository.

use herd_core::entities::Land;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::get_opt_string;

const LAND_COLUMNS: &str = "id, farm_id, name, area_ha, activity";

fn row_to_land(row: &libsql::Row) -> Result<Land, DatabaseError> {
    Ok(Land {
        id: row.get::<i64>(0)?,
        farm_id: row.get::<i64>(1)?,
        name: get_opt_string(row, 2)?,
        area_ha: row.get::<Option<f64>>(3)?,
        activity: get_opt_string(row, 4)?,
    })
}

impl HerdDb {
    pub async fn insert_land(&self, land: &Land) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO lands (id, farm_id, name, area_ha, activity) VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    land.id,
                    land.farm_id,
                    land.name.as_deref(),
                    land.area_ha,
                    land.activity.as_deref()
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_land(&self, id: i64) -> Result<Option<Land>, DatabaseError> {
        let row = self
            .query_opt(&format!("SELECT {LAND_COLUMNS} FROM lands WHERE id = ?1"), [id])
            .await?;
        row.as_ref().map(row_to_land).transpose()
    }

    /// Lands of a farm, ordered by land id.
    pub async fn lands_for_farm(&self, farm_id: i64) -> Result<Vec<Land>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {LAND_COLUMNS} FROM lands WHERE farm_id = ?1 ORDER BY id"),
                [farm_id],
            )
            .await?;

        let mut lands = Vec::new();
        while let Some(row) = rows.next().await? {
            lands.push(row_to_land(&row)?);
        }
        Ok(lands)
    }
}
