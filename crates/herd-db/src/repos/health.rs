//! Health record repository.

use herd_core::entities::HealthRecord;
use herd_core::enums::HealthState;

use crate::HerdDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_datetime, get_opt_string};

fn row_to_health(row: &libsql::Row) -> Result<HealthRecord, DatabaseError> {
    let state = get_opt_string(row, 3)?;
    Ok(HealthRecord {
        id: row.get::<String>(0)?,
        animal_id: row.get::<String>(1)?,
        test_type: get_opt_string(row, 2)?,
        state: HealthState::from_label(state.as_deref().unwrap_or_default()),
        result: get_opt_string(row, 4)?,
        sampled_at: get_opt_datetime(row, 5)?,
        laboratory: get_opt_string(row, 6)?,
        exam_cost: row.get::<Option<f64>>(7)?,
    })
}

impl HerdDb {
    pub async fn insert_health_record(&self, record: &HealthRecord) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO health_records (id, animal_id, test_type, state, result, sampled_at, laboratory, exam_cost)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    record.id.as_str(),
                    record.animal_id.as_str(),
                    record.test_type.as_deref(),
                    record.state.as_str(),
                    record.result.as_deref(),
                    record.sampled_at.map(|t| t.to_rfc3339()),
                    record.laboratory.as_deref(),
                    record.exam_cost
                ],
            )
            .await?;
        Ok(())
    }

    /// Latest health sample by `sampled_at`; ties go to the last inserted row.
    /// Samples without a date sort after every dated sample.
    pub async fn latest_health(&self, animal_id: &str) -> Result<Option<HealthRecord>, DatabaseError> {
        let row = self
            .query_opt(
                "SELECT id, animal_id, test_type, state, result, sampled_at, laboratory, exam_cost
                 FROM health_records WHERE animal_id = ?1
                 ORDER BY julianday(sampled_at) DESC, rowid DESC LIMIT 1",
                [animal_id],
            )
            .await?;
        row.as_ref().map(row_to_health).transpose()
    }
}
