use clap::{Parser, Subcommand};
use log::info;
use rmigrate::clients::errors::Result;

use crate::migrator;

#[derive(Parser)]
#[command(name = "rmigrate")]
#[command(version, about = "Migrate a Beatport playlist export into a Spotify playlist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Migrate {},
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Migrate {} => {
            migrate_playlist().await?;
        }
    }
    Ok(())
}

async fn migrate_playlist() -> Result<()> {
    info!("Building config ...");
    let config = migrator::ConfigBuilder::new().build()?;
    info!("Authorizing Spotify client ...");
    // A CLI prompt may be shown on this call
    config.spotify.authorize_client().await?;
    let migrator = migrator::Migrator::new(config);
    migrator.run().await
}
