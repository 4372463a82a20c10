//! Classification thresholds used by the analytics evaluators.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_underweight_kg() -> f64 {
    100.0
}

const fn default_low_feed() -> f64 {
    100.0
}

const fn default_low_water() -> f64 {
    50.0
}

/// All comparisons are strict: a value equal to its threshold passes.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct AnalyticsConfig {
    /// Latest weight below this marks an animal `underweight`.
    #[serde(default = "default_underweight_kg")]
    pub underweight_kg: f64,

    /// Latest feed availability below this flags `feed`.
    #[serde(default = "default_low_feed")]
    pub low_feed: f64,

    /// Latest water availability below this flags `water`.
    #[serde(default = "default_low_water")]
    pub low_water: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            underweight_kg: default_underweight_kg(),
            low_feed: default_low_feed(),
            low_water: default_low_water(),
        }
    }
}

impl AnalyticsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("analytics.underweight_kg", self.underweight_kg),
            ("analytics.low_feed", self.low_feed),
            ("analytics.low_water", self.low_water),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a finite non-negative number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}
