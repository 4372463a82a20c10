//! Per-animal status, totals and carcass yield.

use herd_core::enums::{AnimalStatus, EntityKind, HealthState};
use herd_core::responses::{AnimalAnalytics, MeatYield};
use herd_core::store::AnalyticsStore;

use crate::{AnalyticsConfig, AnalyticsError};

/// Energy estimate per kilogram of latest body weight.
pub const ENERGY_PER_KG: f64 = 0.5;

/// Evaluate one animal.
///
/// Status priority: a sick latest health record beats an underweight latest
/// weighing, which beats `healthy`. Sums default to `0.0` when no rows exist.
///
/// # Errors
///
/// Returns `AnalyticsError::NotFound` for an unknown animal and
/// `AnalyticsError::Store` if any store query fails.
pub async fn evaluate_animal<S: AnalyticsStore>(
    store: &S,
    thresholds: &AnalyticsConfig,
    animal_id: &str,
) -> Result<AnimalAnalytics, AnalyticsError> {
    if store.get_animal(animal_id).await?.is_none() {
        return Err(AnalyticsError::not_found(EntityKind::Animal, animal_id));
    }

    let latest_weight = store.latest_weight(animal_id).await?.map(|w| w.weight_kg);
    let latest_health = store.latest_health(animal_id).await?.map(|h| h.state);
    let total_emissions = store.emission_total(animal_id).await?;
    let finance = store.finance_totals(animal_id).await?;
    let meat_yield = store
        .carcass_for_animal(animal_id)
        .await?
        .map(|carcass| MeatYield {
            carcass_weight_kg: carcass.carcass_weight_kg,
            live_weight_kg: carcass.live_weight_kg,
            yield_percentage: carcass.yield_percentage,
            slaughter_date: carcass.slaughtered_at,
        });

    let status = classify(latest_health, latest_weight, thresholds);
    tracing::debug!(animal_id, %status, "evaluated animal");

    Ok(AnimalAnalytics {
        animal_id: animal_id.to_string(),
        status,
        latest_weight,
        total_emissions,
        total_costs: finance.costs,
        total_revenue: finance.revenue,
        energy_consumption: latest_weight.unwrap_or(0.0) * ENERGY_PER_KG,
        meat_yield,
    })
}

fn classify(
    health: Option<HealthState>,
    weight_kg: Option<f64>,
    thresholds: &AnalyticsConfig,
) -> AnimalStatus {
    if health == Some(HealthState::Sick) {
        AnimalStatus::Sick
    } else if weight_kg.is_some_and(|kg| kg < thresholds.underweight_kg) {
        AnimalStatus::Underweight
    } else {
        AnimalStatus::Healthy
    }
}
