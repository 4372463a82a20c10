use axum::Json;
use axum::extract::{Path, State};
use herd_analytics::{evaluate_animal, evaluate_farm, evaluate_land};
use herd_core::responses::{AnimalAnalytics, FarmAnalytics, LandAnalytics};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn animal_analytics(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
) -> Result<Json<AnimalAnalytics>, ApiError> {
    let analytics = evaluate_animal(state.db.as_ref(), &state.thresholds, &animal_id).await?;
    Ok(Json(analytics))
}

pub async fn land_analytics(
    State(state): State<AppState>,
    Path(land_id): Path<i64>,
) -> Result<Json<LandAnalytics>, ApiError> {
    let analytics = evaluate_land(state.db.as_ref(), &state.thresholds, land_id).await?;
    Ok(Json(analytics))
}

pub async fn farm_analytics(
    State(state): State<AppState>,
    Path(farm_id): Path<i64>,
) -> Result<Json<FarmAnalytics>, ApiError> {
    let analytics = evaluate_farm(state.db.as_ref(), &state.thresholds, farm_id).await?;
    Ok(Json(analytics))
}
