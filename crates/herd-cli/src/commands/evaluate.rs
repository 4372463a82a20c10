use anyhow::Context;
use herd_analytics::{evaluate_animal, evaluate_farm, evaluate_land};
use herd_config::HerdConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AnimalArgs, FarmArgs, LandArgs};
use crate::output::output;

/// Handle `herd animal <ID>`.
pub async fn handle_animal(
    args: &AnimalArgs,
    config: &HerdConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = bootstrap::open_db(config).await?;
    let analytics = evaluate_animal(&db, &config.analytics, &args.id)
        .await
        .with_context(|| format!("failed to evaluate animal {}", args.id))?;
    output(&analytics, flags.format)
}

/// Handle `herd land <ID>`.
pub async fn handle_land(
    args: &LandArgs,
    config: &HerdConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = bootstrap::open_db(config).await?;
    let analytics = evaluate_land(&db, &config.analytics, args.id)
        .await
        .with_context(|| format!("failed to evaluate land {}", args.id))?;
    output(&analytics, flags.format)
}

/// Handle `herd farm <ID>`.
pub async fn handle_farm(
    args: &FarmArgs,
    config: &HerdConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = bootstrap::open_db(config).await?;
    let analytics = evaluate_farm(&db, &config.analytics, args.id)
        .await
        .with_context(|| format!("failed to evaluate farm {}", args.id))?;
    output(&analytics, flags.format)
}
