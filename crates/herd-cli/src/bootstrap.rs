use anyhow::Context;
use herd_config::HerdConfig;
use herd_db::HerdDb;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `HERD_*`) and apply
/// command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HerdConfig> {
    let config = HerdConfig::load_with_dotenv()?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: HerdConfig, flags: &GlobalFlags) -> anyhow::Result<HerdConfig> {
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
        config.validate()?;
    }
    Ok(config)
}

/// Open the configured database, applying migrations.
pub async fn open_db(config: &HerdConfig) -> anyhow::Result<HerdDb> {
    let target = if config.database.is_remote() {
        config.database.url.as_str()
    } else {
        config.database.path.as_str()
    };
    HerdDb::open(&config.database)
        .await
        .with_context(|| format!("failed to open herd database at {target}"))
}
