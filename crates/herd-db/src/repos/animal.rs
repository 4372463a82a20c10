//! Animal repository.

use herd_core::entities::Animal;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::{count_from_sql, get_opt_datetime, get_opt_string};

fn row_to_animal(row: &libsql::Row) -> Result<Animal, DatabaseError> {
    Ok(Animal {
        id: row.get::<String>(0)?,
        farm_id: row.get::<i64>(1)?,
        land_id: row.get::<i64>(2)?,
        sex: get_opt_string(row, 3)?,
        breed: get_opt_string(row, 4)?,
        born_at: get_opt_datetime(row, 5)?,
        lifecycle_status: get_opt_string(row, 6)?,
        dam_id: get_opt_string(row, 7)?,
        sire_id: get_opt_string(row, 8)?,
        origin: get_opt_string(row, 9)?,
        purpose: get_opt_string(row, 10)?,
    })
}

impl HerdDb {
    /// Insert an animal. Its land must belong to its farm.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the land is missing or owned by
    /// another farm, or `DatabaseError` if the insert fails.
    pub async fn insert_animal(&self, animal: &Animal) -> Result<(), DatabaseError> {
        let land = self.get_land(animal.land_id).await?.ok_or_else(|| {
            DatabaseError::InvalidState(format!("land {} does not exist", animal.land_id))
        })?;
        if land.farm_id != animal.farm_id {
            return Err(DatabaseError::InvalidState(format!(
                "land {} belongs to farm {}, not farm {}",
                land.id, land.farm_id, animal.farm_id
            )));
        }

        self.conn()
            .execute(
                "INSERT INTO animals (id, farm_id, land_id, sex, breed, born_at, lifecycle_status, dam_id, sire_id, origin, purpose)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                libsql::params![
                    animal.id.as_str(),
                    animal.farm_id,
                    animal.land_id,
                    animal.sex.as_deref(),
                    animal.breed.as_deref(),
                    animal.born_at.map(|t| t.to_rfc3339()),
                    animal.lifecycle_status.as_deref(),
                    animal.dam_id.as_deref(),
                    animal.sire_id.as_deref(),
                    animal.origin.as_deref(),
                    animal.purpose.as_deref()
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_animal(&self, id: &str) -> Result<Option<Animal>, DatabaseError> {
        let row = self
            .query_opt(
                "SELECT id, farm_id, land_id, sex, breed, born_at, lifecycle_status, dam_id, sire_id, origin, purpose
                 FROM animals WHERE id = ?1",
                [id],
            )
            .await?;
        row.as_ref().map(row_to_animal).transpose()
    }

    pub async fn count_animals_on_land(&self, land_id: i64) -> Result<u64, DatabaseError> {
        let row = self
            .query_one("SELECT COUNT(*) FROM animals WHERE land_id = ?1", [land_id])
            .await?;
        count_from_sql(row.get::<i64>(0)?)
    }
}
