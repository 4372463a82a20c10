//! Farm roll-up over its land plots.

use futures::future::try_join_all;
use herd_core::enums::{EntityKind, FarmStatus};
use herd_core::responses::FarmAnalytics;
use herd_core::store::AnalyticsStore;

use crate::land::summarize_land;
use crate::{AnalyticsConfig, AnalyticsError};

/// Evaluate a farm and every land plot it owns.
///
/// Land evaluations run concurrently; results keep land id order and the
/// first failing land aborts the whole call. Carcass totals are computed
/// over the animals registered to the farm, independently of the per-land
/// figures.
///
/// # Errors
///
/// Returns `AnalyticsError::NotFound` for an unknown farm and
/// `AnalyticsError::Store` if any store query fails.
pub async fn evaluate_farm<S: AnalyticsStore>(
    store: &S,
    thresholds: &AnalyticsConfig,
    farm_id: i64,
) -> Result<FarmAnalytics, AnalyticsError> {
    if store.get_farm(farm_id).await?.is_none() {
        return Err(AnalyticsError::not_found(EntityKind::Farm, farm_id));
    }

    let lands = store.lands_for_farm(farm_id).await?;
    let lands_status = try_join_all(
        lands
            .iter()
            .map(|land| summarize_land(store, thresholds, land.id)),
    )
    .await?;

    let total_animals = lands_status.iter().map(|land| land.animal_count).sum();
    let status = if lands_status.iter().any(|land| land.needs_attention()) {
        FarmStatus::AttentionNeeded
    } else {
        FarmStatus::Good
    };
    let carcass = store.farm_carcass_summary(farm_id).await?;

    tracing::debug!(farm_id, %status, lands = lands_status.len(), "evaluated farm");

    Ok(FarmAnalytics {
        farm_id,
        status,
        total_lands: lands_status.len() as u64,
        total_animals,
        total_meat_production_kg: carcass.total_carcass_kg,
        average_carcass_yield_percent: carcass.average_yield.unwrap_or(0.0),
        lands_status,
    })
}
