//! Land plot resource status and production.

use herd_core::enums::{EntityKind, LandStatus, ResourceKind};
use herd_core::responses::LandAnalytics;
use herd_core::store::AnalyticsStore;

use crate::{AnalyticsConfig, AnalyticsError};

/// Divisor turning a mean logged weight into a daily gain estimate.
pub const WEIGHT_GAIN_WINDOW_DAYS: f64 = 30.0;

/// Evaluate one land plot.
///
/// # Errors
///
/// Returns `AnalyticsError::NotFound` for an unknown land and
/// `AnalyticsError::Store` if any store query fails.
pub async fn evaluate_land<S: AnalyticsStore>(
    store: &S,
    thresholds: &AnalyticsConfig,
    land_id: i64,
) -> Result<LandAnalytics, AnalyticsError> {
    if store.get_land(land_id).await?.is_none() {
        return Err(AnalyticsError::not_found(EntityKind::Land, land_id));
    }
    summarize_land(store, thresholds, land_id).await
}

/// Land analytics for a land already known to exist.
pub(crate) async fn summarize_land<S: AnalyticsStore>(
    store: &S,
    thresholds: &AnalyticsConfig,
    land_id: i64,
) -> Result<LandAnalytics, AnalyticsError> {
    let resource = store.latest_resource(land_id).await?;
    let latest_feed = resource.as_ref().map(|r| r.feed_available);
    let latest_water = resource.as_ref().map(|r| r.water_available);

    let mut low_resources = Vec::new();
    if latest_feed.is_some_and(|feed| feed < thresholds.low_feed) {
        low_resources.push(ResourceKind::Feed);
    }
    if latest_water.is_some_and(|water| water < thresholds.low_water) {
        low_resources.push(ResourceKind::Water);
    }
    let status = if low_resources.is_empty() {
        LandStatus::Good
    } else {
        LandStatus::LowResources
    };

    let animal_count = store.count_animals_on_land(land_id).await?;
    let total_meat_produced_kg = store.land_carcass_total(land_id).await?;
    let mean_weights = store.land_mean_weights(land_id).await?;

    tracing::debug!(land_id, %status, animal_count, "evaluated land");

    Ok(LandAnalytics {
        land_id,
        status,
        low_resources,
        animal_count,
        latest_feed,
        latest_water,
        total_meat_produced_kg,
        avg_daily_weight_gain_kg: daily_gain(&mean_weights),
    })
}

/// Mean of per-animal mean weights spread over the gain window.
#[allow(clippy::cast_precision_loss)]
fn daily_gain(mean_weights: &[f64]) -> f64 {
    if mean_weights.is_empty() {
        return 0.0;
    }
    let mean = mean_weights.iter().sum::<f64>() / mean_weights.len() as f64;
    mean / WEIGHT_GAIN_WINDOW_DAYS
}
