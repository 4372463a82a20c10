//! Error types for the analytics evaluators.

use herd_core::enums::EntityKind;
use herd_core::errors::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The requested farm, land or animal does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AnalyticsError {
    pub(crate) fn not_found(entity: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
