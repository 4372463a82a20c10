//! Database error types for herd-db.

use herd_core::errors::StoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned an unparseable value.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Query(_) | DatabaseError::InvalidState(_) => {
                Self::Corrupt(error.to_string())
            }
            DatabaseError::Migration(_)
            | DatabaseError::NoResult
            | DatabaseError::LibSql(_)
            | DatabaseError::Other(_) => Self::Unavailable(error.to_string()),
        }
    }
}
