//! Cross-cutting error types for Herd.
//!
//! Storage backends convert their own errors (e.g. `DatabaseError` in
//! `herd-db`) into [`StoreError`] at the [`crate::store::AnalyticsStore`]
//! boundary so the evaluators never see backend-specific types.

use thiserror::Error;

/// Errors surfaced by an [`crate::store::AnalyticsStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the query failed to execute.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store answered, but with data that cannot be decoded.
    #[error("Corrupt store data: {0}")]
    Corrupt(String),
}
