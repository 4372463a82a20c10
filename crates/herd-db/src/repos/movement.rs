//! Animal movement repository.

use herd_core::entities::Movement;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_datetime, get_opt_string};

fn row_to_movement(row: &libsql::Row) -> Result<Movement, DatabaseError> {
    Ok(Movement {
        id: row.get::<String>(0)?,
        animal_id: row.get::<String>(1)?,
        kind: get_opt_string(row, 2)?,
        moved_at: get_opt_datetime(row, 3)?,
        origin_farm: get_opt_string(row, 4)?,
        origin_land: get_opt_string(row, 5)?,
        destination_farm: get_opt_string(row, 6)?,
        destination_land: get_opt_string(row, 7)?,
        reason: get_opt_string(row, 8)?,
    })
}

impl HerdDb {
    pub async fn insert_movement(&self, movement: &Movement) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO movements (id, animal_id, kind, moved_at, origin_farm, origin_land, destination_farm, destination_land, reason)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    movement.id.as_str(),
                    movement.animal_id.as_str(),
                    movement.kind.as_deref(),
                    movement.moved_at.map(|t| t.to_rfc3339()),
                    movement.origin_farm.as_deref(),
                    movement.origin_land.as_deref(),
                    movement.destination_farm.as_deref(),
                    movement.destination_land.as_deref(),
                    movement.reason.as_deref()
                ],
            )
            .await?;
        Ok(())
    }

    /// Movement history of an animal, oldest first.
    pub async fn movements_for_animal(&self, animal_id: &str) -> Result<Vec<Movement>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, animal_id, kind, moved_at, origin_farm, origin_land, destination_farm, destination_land, reason
                 FROM movements WHERE animal_id = ?1
                 ORDER BY julianday(moved_at), rowid",
                [animal_id],
            )
            .await?;

        let mut movements = Vec::new();
        while let Some(row) = rows.next().await? {
            movements.push(row_to_movement(&row)?);
        }
        Ok(movements)
    }
}
