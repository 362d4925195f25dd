use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum HostfoldError {
    /// The source could not be reached at all (DNS, connect, TLS, timeout).
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The connection dropped while the body was being read.
    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] BoxError),

    #[error("fetch workers exited before every source was reported")]
    WorkerLost,
}

impl HostfoldError {
    /// Transport and body failures both mean the source never fully arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Body { .. })
    }
}

pub type Result<T> = std::result::Result<T, HostfoldError>;
