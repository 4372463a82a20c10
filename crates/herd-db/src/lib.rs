//! # herd-db
//!
//! libSQL entity store for Herd livestock records.
//!
//! Holds the relational tables the analytics evaluators read: farms, lands,
//! animals, health records, movements, carcass weighings and the weight,
//! emission, finance and resource log streams. Implements
//! [`herd_core::store::AnalyticsStore`] on top of them.
//!
//! Uses the `libsql` crate for both local files and remote databases.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use herd_config::DatabaseConfig;
use libsql::Builder;

/// Central database handle for all Herd record operations.
///
/// Wraps a libSQL database and a single connection shared by every query.
pub struct HerdDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl HerdDb {
    /// Open the database described by `config`.
    ///
    /// A configured `url` opens the remote database; otherwise `path` is
    /// opened locally.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let herd_db = Self {
            db,
            conn,
            remote: false,
        };
        herd_db.run_migrations().await?;
        tracing::debug!(path, "opened local herd database");
        Ok(herd_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let herd_db = Self {
            db,
            conn,
            remote: true,
        };
        herd_db.run_migrations().await?;
        tracing::debug!(url, "opened remote herd database");
        Ok(herd_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Run a query expected to return exactly one row.
    pub(crate) async fn query_one(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Row, DatabaseError> {
        let mut rows = self.conn.query(sql, params).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)
    }

    /// Run a query returning at most one row.
    pub(crate) async fn query_opt(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Option<libsql::Row>, DatabaseError> {
        let mut rows = self.conn.query(sql, params).await?;
        Ok(rows.next().await?)
    }
}
