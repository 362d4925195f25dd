use tracing::info;

/// Counters for one run. Only the coordinator writes to them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub sources_fetched: u64,
    pub sources_non_success: u64,
    pub sources_skipped: u64,
    pub lines_seen: u64,
    pub lines_rejected: u64,
    pub whitelist_hits: u64,
    pub duplicates: u64,
    pub hosts_added: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_summary(&self) {
        info!(
            "RUN SUMMARY: Sources: {} ok, {} non-success, {} skipped. Lines: {}, Rejected: {} ({:.1}%), Whitelisted: {}, Duplicates: {}, Hosts: {}",
            self.sources_fetched,
            self.sources_non_success,
            self.sources_skipped,
            self.lines_seen,
            self.lines_rejected,
            if self.lines_seen > 0 {
                (self.lines_rejected as f64 / self.lines_seen as f64) * 100.0
            } else {
                0.0
            },
            self.whitelist_hits,
            self.duplicates,
            self.hosts_added
        );
    }
}
