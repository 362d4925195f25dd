use crate::error::Result;

/// What a source returned: its HTTP status and, on success, its body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub lines: Vec<String>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }
}

/// Any 2xx status.
pub(crate) fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Retrieves the raw lines of one remote list.
///
/// `Err` means the source could not be reached at all. A reachable source that
/// answers with an error status is `Ok` with that status and no lines.
#[async_trait::async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}
