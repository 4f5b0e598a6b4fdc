use std::env;

use anyhow::Result;
use clap::Parser;
use shop_widgets::{
    cli::{Args, CliApp},
    utils::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    dotenv::dotenv().ok();
    let directive = Config::log_directive(args.verbose, |key| env::var(key).ok());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()
        .and_then(|config| config.with_catalog_path(args.catalog.clone()))
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {:#}", e);
            e
        })?;

    tracing::info!("🛒 Shop starting in {} environment", config.environment);

    let app = CliApp::new(config).await.map_err(|e| {
        tracing::error!("Failed to start: {:#}", e);
        e
    })?;
    app.run(args.command).await?;

    tracing::info!("🛒 Shop stopped");
    Ok(())
}
