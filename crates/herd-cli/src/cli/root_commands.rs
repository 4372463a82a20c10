use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the analytics HTTP server.
    Serve(ServeArgs),
    /// Evaluate one animal.
    Animal(AnimalArgs),
    /// Evaluate one land plot.
    Land(LandArgs),
    /// Evaluate a farm and all of its land plots.
    Farm(FarmArgs),
    /// Open the database and apply the schema.
    Migrate,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind host (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct AnimalArgs {
    /// Animal identifier, e.g. BOV-0001.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct LandArgs {
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct FarmArgs {
    pub id: i64,
}
