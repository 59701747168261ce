// src/raw_data/mod.rs
//! Scalar stream decoding for QGD files
//!
//! The `Retention Time` and `TIC Data` streams hold one value per scan:
//!
//! - [`decode_retention_times`] - little-endian `i32` milliseconds
//! - [`decode_tic`] - little-endian `i64` total ion current
//!
//! # Example
//!
//! ```
//! use qgd_rs::raw_data::{decode_retention_times, decode_tic};
//!
//! let rt = decode_retention_times(&[0x60, 0xEA, 0, 0]).unwrap();
//! assert_eq!(rt[0], 60_000);
//!
//! let tic = decode_tic(&7i64.to_le_bytes()).unwrap();
//! assert_eq!(tic[0], 7);
//! ```

mod reader;

pub use reader::{
    decode_retention_times, decode_tic, ScalarStreamReader, RETENTION_TIME_WIDTH, TIC_WIDTH,
};

pub(crate) use reader::check_width;
