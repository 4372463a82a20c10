//! # herd-analytics
//!
//! Status evaluators for animals, land plots and farms.
//!
//! Every evaluator is a read-only async function over an
//! [`AnalyticsStore`](herd_core::store::AnalyticsStore) handle and the
//! classification thresholds from [`AnalyticsConfig`]. Missing log data
//! never fails an evaluation; only an unknown identifier or a store
//! failure does.

mod animal;
mod error;
mod farm;
mod land;

#[cfg(test)]
mod test_support;

pub use animal::{ENERGY_PER_KG, evaluate_animal};
pub use error::AnalyticsError;
pub use farm::evaluate_farm;
pub use herd_config::AnalyticsConfig;
pub use land::{WEIGHT_GAIN_WINDOW_DAYS, evaluate_land};
