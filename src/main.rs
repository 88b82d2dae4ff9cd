use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stt_merge::{Cli, Config, Pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stt_merge=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (config, loaded_path) = Config::discover()?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }

    let pipeline = Pipeline::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pipeline.run(&cli.storage_uri, &mut out).await?;

    Ok(())
}
