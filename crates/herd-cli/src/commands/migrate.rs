use herd_config::HerdConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MigrateResponse {
    database: String,
    remote: bool,
    migrated: bool,
}

/// Handle `herd migrate`.
pub async fn handle(config: &HerdConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = bootstrap::open_db(config).await?;
    let database = if db.is_remote() {
        config.database.url.clone()
    } else {
        config.database.path.clone()
    };
    tracing::info!(%database, "schema up to date");

    output(
        &MigrateResponse {
            database,
            remote: db.is_remote(),
            migrated: true,
        },
        flags.format,
    )
}
