use anyhow::Context;
use herd_config::HerdConfig;
use herd_server::AppState;

use crate::bootstrap;
use crate::cli::root_commands::ServeArgs;

/// Handle `herd serve`.
pub async fn handle(args: &ServeArgs, mut config: HerdConfig) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let db = bootstrap::open_db(&config).await?;
    let state = AppState::new(db, config.analytics);

    herd_server::serve(state, &config.server)
        .await
        .with_context(|| format!("server on {} failed", config.server.bind_address()))
}
