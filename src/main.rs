use case_order_buddy::{
    bot, config,
    core::catalog::Catalog,
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Tracing first, so everything below is logged
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. .env is optional; variables can come from the environment
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Settings
    let app_config = config::load_app_configuration()?;

    // 4. Catalog. A malformed catalog stops the bot before it connects.
    let catalog = match &app_config.catalog_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
    .inspect(|catalog| info!("Catalog loaded with {} colors.", catalog.colors().len()))
    .inspect_err(|e| error!("Failed to load catalog: {}", e))?;

    // 5. Run the bot. The token is read right before use and never stored.
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, &app_config, catalog)
        .await
        .map_err(Error::from)?;

    Ok(())
}
