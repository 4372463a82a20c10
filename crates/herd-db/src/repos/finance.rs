//! Finance log repository.

use chrono::{DateTime, Utc};
use herd_core::entities::FinanceLog;
use herd_core::store::FinanceTotals;

use crate::HerdDb;
use crate::error::DatabaseError;

impl HerdDb {
    pub async fn record_finance(
        &self,
        animal_id: &str,
        feed_cost: f64,
        medical_cost: f64,
        sale_revenue: f64,
        logged_at: DateTime<Utc>,
    ) -> Result<FinanceLog, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO finance_logs (animal_id, feed_cost, medical_cost, sale_revenue, logged_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    animal_id,
                    feed_cost,
                    medical_cost,
                    sale_revenue,
                    logged_at.to_rfc3339()
                ],
            )
            .await?;

        Ok(FinanceLog {
            id: self.conn().last_insert_rowid(),
            animal_id: animal_id.to_string(),
            feed_cost,
            medical_cost,
            sale_revenue,
            logged_at,
        })
    }

    pub async fn finance_totals(&self, animal_id: &str) -> Result<FinanceTotals, DatabaseError> {
        let row = self
            .query_one(
                "SELECT CAST(COALESCE(SUM(feed_cost + medical_cost), 0) AS REAL),
                        CAST(COALESCE(SUM(sale_revenue), 0) AS REAL)
                 FROM finance_logs WHERE animal_id = ?1",
                [animal_id],
            )
            .await?;
        Ok(FinanceTotals {
            costs: row.get::<f64>(0)?,
            revenue: row.get::<f64>(1)?,
        })
    }
}
