use super::traits::{FetchResponse, SourceFetcher};
use crate::config::FetchConfig;
use crate::error::{HostfoldError, Result};
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_util::io::StreamReader;
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HostfoldError::Client(Box::new(e)))?;
        Ok(Self { client })
    }
}

/// Splits a body into lines. A trailing `\r` is dropped and invalid UTF-8 is
/// replaced rather than failing the line.
pub(crate) async fn read_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncRead + Unpin,
{
    let mut segments = BufReader::new(reader).split(b'\n');
    let mut lines = Vec::new();

    while let Some(mut segment) = segments.next_segment().await? {
        if segment.last() == Some(&b'\r') {
            segment.pop();
        }
        lines.push(String::from_utf8_lossy(&segment).into_owned());
    }
    Ok(lines)
}

#[async_trait::async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HostfoldError::Transport {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = resp.status();
        if !status.is_success() {
            debug!("{} answered {}, not reading body", url, status);
            return Ok(FetchResponse {
                status: status.as_u16(),
                lines: Vec::new(),
            });
        }

        // The response is consumed here and released on every return path.
        let stream = resp
            .bytes_stream()
            .map(|result| result.map_err(std::io::Error::other));
        let lines = read_lines(StreamReader::new(stream))
            .await
            .map_err(|e| HostfoldError::Body {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        debug!("Read {} lines from {}", lines.len(), url);
        Ok(FetchResponse {
            status: status.as_u16(),
            lines,
        })
    }
}
