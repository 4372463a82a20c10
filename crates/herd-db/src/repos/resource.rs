//! Resource log repository.

use chrono::{DateTime, Utc};
use herd_core::entities::ResourceLog;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

fn row_to_resource(row: &libsql::Row) -> Result<ResourceLog, DatabaseError> {
    Ok(ResourceLog {
        id: row.get::<i64>(0)?,
        land_id: row.get::<i64>(1)?,
        feed_available: row.get::<f64>(2)?,
        water_available: row.get::<f64>(3)?,
        logged_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl HerdDb {
    pub async fn record_resource(
        &self,
        land_id: i64,
        feed_available: f64,
        water_available: f64,
        logged_at: DateTime<Utc>,
    ) -> Result<ResourceLog, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO resource_logs (land_id, feed_available, water_available, logged_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![land_id, feed_available, water_available, logged_at.to_rfc3339()],
            )
            .await?;

        Ok(ResourceLog {
            id: self.conn().last_insert_rowid(),
            land_id,
            feed_available,
            water_available,
            logged_at,
        })
    }

    /// Latest resource observation by `logged_at`; ties go to the highest id.
    pub async fn latest_resource(&self, land_id: i64) -> Result<Option<ResourceLog>, DatabaseError> {
        let row = self
            .query_opt(
                "SELECT id, land_id, feed_available, water_available, logged_at FROM resource_logs
                 WHERE land_id = ?1
                 ORDER BY julianday(logged_at) DESC, id DESC LIMIT 1",
                [land_id],
            )
            .await?;
        row.as_ref().map(row_to_resource).transpose()
    }
}
