// src/container/mod.rs
//! Access to the compound-document container of a QGD file
//!
//! A QGD file is an OLE compound document. The decoder needs four streams
//! from the `GCMS Raw Data` storage:
//!
//! - [`RETENTION_TIME_STREAM`] - packed `i32` retention times (ms)
//! - [`TIC_STREAM`] - packed `i64` total ion current values
//! - [`SPECTRUM_INDEX_STREAM`] - packed `u32` scan block offsets
//! - [`MS_RAW_DATA_STREAM`] - concatenated scan blocks
//!
//! # Example
//!
//! ```no_run
//! use qgd_rs::container::Container;
//!
//! let mut container = Container::open("sample.qgd").unwrap();
//! let rt = container.stream("/GCMS Raw Data/Retention Time").unwrap();
//! println!("{} bytes", rt.len());
//! ```

mod compound;

pub use compound::{Container, QgdStreams, ReadSeek};

pub const RETENTION_TIME_STREAM: &str = "Retention Time";
pub const TIC_STREAM: &str = "TIC Data";
pub const MS_RAW_DATA_STREAM: &str = "MS Raw Data";
pub const SPECTRUM_INDEX_STREAM: &str = "Spectrum Index";

/// Join a storage and stream name into an absolute container path
pub fn stream_path(storage: &str, stream: &str) -> String {
    let storage = storage.trim_matches('/');
    if storage.is_empty() {
        format!("/{}", stream)
    } else {
        format!("/{}/{}", storage, stream)
    }
}
