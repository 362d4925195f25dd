//! Writes the merged host list as a hosts file.

use crate::engine::Accumulator;
use crate::error::{HostfoldError, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

/// Every host is written as `0.0.0.0 <host>`, one per line, in merge order.
pub async fn write_hosts(path: impl AsRef<Path>, hosts: &Accumulator) -> Result<()> {
    let path = path.as_ref();
    let output_err = |source| HostfoldError::Output {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).await.map_err(output_err)?;
    let mut writer = BufWriter::new(file);

    for host in hosts.iter() {
        writer
            .write_all(format!("0.0.0.0 {}\n", host).as_bytes())
            .await
            .map_err(output_err)?;
    }
    writer.flush().await.map_err(output_err)?;

    info!("Wrote {} hosts to {}", hosts.len(), path.display());
    Ok(())
}
