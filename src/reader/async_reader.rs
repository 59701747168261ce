// src/reader/async_reader.rs
#![cfg(feature = "async")]
use crate::dataset::DecodeOutput;
use crate::error::{QgdError, Result};
use crate::options::DecodeOptions;
use crate::reader::QgdReader;
use std::path::Path;
use tokio::task;

/// Open and decode a QGD file on tokio's blocking pool
///
/// ```no_run
/// # #[cfg(feature = "async")]
/// # async fn run() -> qgd_rs::Result<()> {
/// use qgd_rs::{decode_file_async, DecodeOptions};
///
/// let output = decode_file_async("sample.qgd", DecodeOptions::default()).await?;
/// println!("{} scans", output.dataset.len());
/// # Ok(())
/// # }
/// ```
pub async fn decode_file_async(
    path: impl AsRef<Path>,
    options: DecodeOptions,
) -> Result<DecodeOutput> {
    let path = path.as_ref().to_path_buf();
    task::spawn_blocking(move || QgdReader::open_with(&path, options)?.decode())
        .await
        .map_err(|e| QgdError::DecodeTaskFailed(e.to_string()))?
}

/// Decode an already opened reader on tokio's blocking pool
pub async fn decode_async(reader: QgdReader) -> Result<DecodeOutput> {
    task::spawn_blocking(move || reader.decode())
        .await
        .map_err(|e| QgdError::DecodeTaskFailed(e.to_string()))?
}
