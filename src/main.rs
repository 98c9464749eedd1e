mod cli;
mod migrator;

use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    rmigrate::logging::init(Path::new("app_logs"))?;

    cli::run().await?;

    Ok(())
}
