//! Weight log repository.

use chrono::{DateTime, Utc};
use herd_core::entities::WeightLog;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

fn row_to_weight(row: &libsql::Row) -> Result<WeightLog, DatabaseError> {
    Ok(WeightLog {
        id: row.get::<i64>(0)?,
        animal_id: row.get::<String>(1)?,
        weight_kg: row.get::<f64>(2)?,
        measured_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl HerdDb {
    pub async fn record_weight(
        &self,
        animal_id: &str,
        weight_kg: f64,
        measured_at: DateTime<Utc>,
    ) -> Result<WeightLog, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO weight_logs (animal_id, weight_kg, measured_at) VALUES (?1, ?2, ?3)",
                libsql::params![animal_id, weight_kg, measured_at.to_rfc3339()],
            )
            .await?;

        Ok(WeightLog {
            id: self.conn().last_insert_rowid(),
            animal_id: animal_id.to_string(),
            weight_kg,
            measured_at,
        })
    }

    /// Latest weighing by `measured_at`; ties go to the highest id.
    pub async fn latest_weight(&self, animal_id: &str) -> Result<Option<WeightLog>, DatabaseError> {
        let row = self
            .query_opt(
                "SELECT id, animal_id, weight_kg, measured_at FROM weight_logs
                 WHERE animal_id = ?1
                 ORDER BY julianday(measured_at) DESC, id DESC LIMIT 1",
                [animal_id],
            )
            .await?;
        row.as_ref().map(row_to_weight).transpose()
    }

    /// Per-animal mean weight for animals on `land_id` with at least one log,
    /// ordered by animal id.
    pub async fn land_mean_weights(&self, land_id: i64) -> Result<Vec<f64>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT CAST(AVG(w.weight_kg) AS REAL) FROM weight_logs w
                 WHERE w.animal_id IN (SELECT id FROM animals WHERE land_id = ?1)
                 GROUP BY w.animal_id ORDER BY w.animal_id",
                [land_id],
            )
            .await?;

        let mut means = Vec::new();
        while let Some(row) = rows.next().await? {
            means.push(row.get::<f64>(0)?);
        }
        Ok(means)
    }
}
