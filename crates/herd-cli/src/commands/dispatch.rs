use herd_config::HerdConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: HerdConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Animal(args) => commands::evaluate::handle_animal(&args, &config, flags).await,
        Commands::Land(args) => commands::evaluate::handle_land(&args, &config, flags).await,
        Commands::Farm(args) => commands::evaluate::handle_farm(&args, &config, flags).await,
        Commands::Migrate => commands::migrate::handle(&config, flags).await,
    }
}
