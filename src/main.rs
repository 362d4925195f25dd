use anyhow::{Context, Result};
use tracing::info;

use hostfold::config::Config;
use hostfold::init::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Config
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or("hostfold.toml".to_string());
    let config_exists = std::path::Path::new(&config_path).exists();
    let config = if config_exists {
        Config::load(&config_path).await?
    } else {
        Config::default()
    };

    // 2. Setup Logging
    setup_logging(&config);
    info!("Starting hostfold...");

    if !config_exists {
        info!("Config file {} not found, using defaults.", config_path);
    }

    config.validate()?;

    // 3. Fetch, merge and write
    let stats = hostfold::run(config)
        .await
        .context("Failed to build hosts file")?;
    stats.log_summary();

    Ok(())
}
