pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod output;
pub mod stats;

use crate::config::Config;
use crate::engine::{HttpFetcher, Pipeline, SourceFetcher};
use crate::stats::RunStats;
use std::sync::Arc;

/// Fetches every configured list over HTTP and writes the merged hosts file.
pub async fn run(config: Config) -> error::Result<RunStats> {
    let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
    run_with_fetcher(config, fetcher).await
}

/// Same as [`run`], with the fetch collaborator supplied by the caller.
pub async fn run_with_fetcher(
    config: Config,
    fetcher: Arc<dyn SourceFetcher>,
) -> error::Result<RunStats> {
    let output_path = config.output_path.clone();
    let pipeline = Pipeline::new(config, fetcher);

    let (hosts, stats) = pipeline.run().await?;
    output::write_hosts(&output_path, &hosts).await?;

    Ok(stats)
}
