use super::accumulator::Accumulator;
use super::normalizer::normalize;
use super::pool::FetchPool;
use super::traits::SourceFetcher;
use super::whitelist::Whitelist;
use crate::config::Config;
use crate::error::{HostfoldError, Result};
use crate::stats::RunStats;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs one fetch/normalize/merge pass over the configured sources.
pub struct Pipeline {
    config: Config,
    fetcher: Arc<dyn SourceFetcher>,
    whitelist: Whitelist,
}

impl Pipeline {
    pub fn new(config: Config, fetcher: Arc<dyn SourceFetcher>) -> Self {
        let whitelist = Whitelist::new(config.whitelist.iter().cloned());
        Self {
            config,
            fetcher,
            whitelist,
        }
    }

    /// Merges every source in completion order, then the seed blacklist.
    ///
    /// The first fatal fetch error ends the run; nothing merged so far is kept.
    pub async fn run(&self) -> Result<(Accumulator, RunStats)> {
        let mut acc = Accumulator::new();
        let mut stats = RunStats::new();
        let sources = &self.config.sources;

        if !sources.is_empty() {
            let pool = FetchPool::new(
                self.fetcher.clone(),
                self.config.worker_count(),
                self.config.fetch.on_transport_error,
            );
            let mut results = pool.start(sources);

            for _ in 0..sources.len() {
                let batch = match results.recv().await {
                    Some(Ok(batch)) => batch,
                    Some(Err(e)) => {
                        results.abort();
                        return Err(e);
                    }
                    None => return Err(HostfoldError::WorkerLost),
                };

                if batch.is_success() {
                    stats.sources_fetched += 1;
                } else if batch.status.is_none() {
                    stats.sources_skipped += 1;
                } else {
                    stats.sources_non_success += 1;
                }

                let before = acc.len();
                self.merge_batch(&mut acc, &mut stats, &batch.lines);
                debug!(
                    "Merged {} new hosts from {}",
                    acc.len() - before,
                    batch.url
                );
            }
        }

        let before = acc.len();
        self.merge_batch(&mut acc, &mut stats, &self.config.blacklist);
        info!(
            "Merged {} new hosts from the seed blacklist ({} total)",
            acc.len() - before,
            acc.len()
        );

        Ok((acc, stats))
    }

    /// Normalizer, then whitelist, then accumulator, line by line in order.
    pub fn merge_batch<S: AsRef<str>>(
        &self,
        acc: &mut Accumulator,
        stats: &mut RunStats,
        lines: &[S],
    ) {
        for line in lines {
            stats.lines_seen += 1;

            let Some(token) = normalize(line.as_ref()) else {
                stats.lines_rejected += 1;
                continue;
            };

            if self.whitelist.contains(&token) {
                stats.whitelist_hits += 1;
                continue;
            }

            if acc.add(&token) {
                stats.hosts_added += 1;
            } else {
                stats.duplicates += 1;
            }
        }
    }
}
