//! Emission log repository.

use chrono::{DateTime, Utc};
use herd_core::entities::EmissionLog;

use crate::HerdDb;
use crate::error::DatabaseError;

impl HerdDb {
    pub async fn record_emission(
        &self,
        animal_id: &str,
        co2: f64,
        methane: f64,
        logged_at: DateTime<Utc>,
    ) -> Result<EmissionLog, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO emission_logs (animal_id, co2, methane, logged_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![animal_id, co2, methane, logged_at.to_rfc3339()],
            )
            .await?;

        Ok(EmissionLog {
            id: self.conn().last_insert_rowid(),
            animal_id: animal_id.to_string(),
            co2,
            methane,
            logged_at,
        })
    }

    /// Σ (co2 + methane) over all emission logs of an animal; `0.0` if none.
    pub async fn emission_total(&self, animal_id: &str) -> Result<f64, DatabaseError> {
        let row = self
            .query_one(
                "SELECT CAST(COALESCE(SUM(co2 + methane), 0) AS REAL)
                 FROM emission_logs WHERE animal_id = ?1",
                [animal_id],
            )
            .await?;
        Ok(row.get::<f64>(0)?)
    }
}
