// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QgdError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a compound document: {} ({reason})", path.display())]
    NotACompoundFile { path: PathBuf, reason: String },

    #[error("Stream missing from container: {0}")]
    StreamMissing(String),

    #[error("Malformed stream '{stream}': {byte_len} bytes is not a multiple of {element_width}")]
    MalformedStream {
        stream: String,
        byte_len: usize,
        element_width: usize,
    },

    #[error("Malformed spectrum index at entry {position}: offset {offset} after {previous} ({reason})")]
    MalformedIndex {
        position: usize,
        previous: u64,
        offset: u64,
        reason: &'static str,
    },

    #[error("Truncated scan {scan_index} at offset {block_start}: {available} bytes cannot hold a scan header")]
    TruncatedScan {
        scan_index: usize,
        block_start: u64,
        available: usize,
    },

    #[error(
        "Unresolvable scan length for scan {scan_number} at offset {block_start}: \
         block is {expected_length} bytes, header declares {declared_points} points of width {declared_width}"
    )]
    UnresolvableScanLength {
        scan_number: usize,
        block_start: u64,
        expected_length: usize,
        declared_width: u16,
        declared_points: u16,
    },

    #[error("Length mismatch: {retention_times} retention times, {tic} TIC values, {scans} scans")]
    LengthMismatch {
        retention_times: usize,
        tic: usize,
        scans: usize,
    },

    #[error("Scan out of order: position {position} holds scan {scan_number}")]
    ScanOutOfOrder { position: usize, scan_number: usize },

    #[error("Decode task failed: {0}")]
    DecodeTaskFailed(String),
}

pub type Result<T> = std::result::Result<T, QgdError>;
