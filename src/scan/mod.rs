// src/scan/mod.rs
//! Scan block decoding for the `MS Raw Data` stream
//!
//! Every scan block is a 32-byte [`ScanHeader`] followed by packed pairs of a
//! `u16` m/z (scaled by 20) and an unsigned intensity whose width the header
//! declares. Headers sometimes declare the wrong width; the block length from
//! the spectrum index decides which width is really in use, see
//! [`resolve_intensity_width`].

mod block;
mod header;
mod width;

pub use block::{decode_pairs, DecodedScan, ScanBlockParser};
pub use header::ScanHeader;
pub use width::{pair_size, MAX_INTENSITY_WIDTH, resolve_intensity_width, WidthResolution};

/// Size of the fixed header that opens every scan block
pub const SCAN_HEADER_SIZE: usize = ScanHeader::SIZE;
