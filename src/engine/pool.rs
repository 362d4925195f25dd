use super::traits::{is_success_status, SourceFetcher};
use crate::config::TransportErrorPolicy;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Everything one source contributed to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBatch {
    pub url: String,
    /// `None` when the source was unreachable and the `skip` policy applied.
    pub status: Option<u16>,
    pub lines: Vec<String>,
}

impl SourceBatch {
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(is_success_status)
    }
}

pub type SourceResult = Result<SourceBatch>;

/// A running pool: its result channel plus the worker tasks.
///
/// Dropping the handle aborts any worker still fetching.
pub struct PoolHandle {
    results: mpsc::Receiver<SourceResult>,
    workers: JoinSet<()>,
}

impl PoolHandle {
    /// Next finished source, or `None` once every worker has exited.
    pub async fn recv(&mut self) -> Option<SourceResult> {
        self.results.recv().await
    }

    /// Stops all workers; in-flight fetches are cancelled.
    pub fn abort(&mut self) {
        self.workers.abort_all();
        self.results.close();
    }
}

/// Fixed set of workers pulling sources off a shared queue.
pub struct FetchPool {
    fetcher: Arc<dyn SourceFetcher>,
    workers: usize,
    policy: TransportErrorPolicy,
}

impl FetchPool {
    pub fn new(
        fetcher: Arc<dyn SourceFetcher>,
        workers: usize,
        policy: TransportErrorPolicy,
    ) -> Self {
        Self {
            fetcher,
            workers: workers.max(1),
            policy,
        }
    }

    /// Queues every source and starts the workers. Exactly one result per
    /// source arrives on the handle, in completion order, unless a worker dies.
    pub fn start(&self, sources: &[String]) -> PoolHandle {
        // Both channels hold every source, so nobody ever waits on a send.
        let capacity = sources.len().max(1);
        let (work_tx, work_rx) = mpsc::channel::<String>(capacity);
        let (result_tx, result_rx) = mpsc::channel::<SourceResult>(capacity);

        for source in sources {
            work_tx
                .try_send(source.clone())
                .expect("work queue is sized to hold every source");
        }
        // Closing the queue: workers exit once it is drained.
        drop(work_tx);

        let work_rx = Arc::new(Mutex::new(work_rx));
        let workers = self.workers.min(capacity);
        info!(
            "Fetching {} sources with {} workers",
            sources.len(),
            workers
        );

        let mut tasks = JoinSet::new();
        for worker_id in 0..workers {
            let fetcher = self.fetcher.clone();
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let policy = self.policy;

            tasks.spawn(async move {
                run_worker(worker_id, fetcher, work_rx, result_tx, policy).await;
            });
        }

        PoolHandle {
            results: result_rx,
            workers: tasks,
        }
    }
}

async fn run_worker(
    worker_id: usize,
    fetcher: Arc<dyn SourceFetcher>,
    work_rx: Arc<Mutex<mpsc::Receiver<String>>>,
    result_tx: mpsc::Sender<SourceResult>,
    policy: TransportErrorPolicy,
) {
    loop {
        let next = {
            let mut rx = work_rx.lock().await;
            rx.recv().await
        };
        let Some(url) = next else {
            break;
        };

        debug!("Worker {} fetching {}", worker_id, url);
        let result = fetch_source(fetcher.as_ref(), url, policy).await;
        let fatal = result.is_err();

        if result_tx.send(result).await.is_err() {
            // Coordinator has given up on the run.
            break;
        }
        if fatal {
            break;
        }
    }
    debug!("Worker {} finished", worker_id);
}

async fn fetch_source(
    fetcher: &dyn SourceFetcher,
    url: String,
    policy: TransportErrorPolicy,
) -> SourceResult {
    match fetcher.fetch(&url).await {
        Ok(resp) if resp.is_success() => {
            info!("Fetched {} lines from {}", resp.lines.len(), url);
            Ok(SourceBatch {
                url,
                status: Some(resp.status),
                lines: resp.lines,
            })
        }
        Ok(resp) => {
            warn!("{} returned status {}, contributing nothing", url, resp.status);
            Ok(SourceBatch {
                url,
                status: Some(resp.status),
                lines: Vec::new(),
            })
        }
        Err(e) if e.is_transport() && policy == TransportErrorPolicy::Skip => {
            warn!("Skipping unreachable source: {}", e);
            Ok(SourceBatch {
                url,
                status: None,
                lines: Vec::new(),
            })
        }
        Err(e) => {
            error!("Aborting run: {}", e);
            Err(e)
        }
    }
}
