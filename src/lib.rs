// src/lib.rs
//! # qgd-rs
//!
//! A Rust decoder for Shimadzu GCMS `.qgd` raw data files.
//!
//! A QGD file is an OLE compound document. Inside its `GCMS Raw Data`
//! storage, four streams carry the acquisition:
//!
//! - **Retention Time**: one `i32` per scan, milliseconds
//! - **TIC Data**: one `i64` per scan, total ion current
//! - **Spectrum Index**: one `u32` offset per scan into `MS Raw Data`
//! - **MS Raw Data**: scan blocks, each a 32-byte header plus m/z and intensity pairs
//!
//! Scan headers declare the byte width of their intensities, and that
//! declaration is sometimes wrong. The spectrum index is treated as the only
//! trustworthy source of block lengths, and scans whose header disagrees
//! with it are repaired and reported as [`DecodeWarning`]s.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qgd_rs::*;
//!
//! fn main() -> Result<()> {
//!     let output = decode_file("sample.qgd")?;
//!
//!     for warning in &output.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     for scan in &output.dataset {
//!         println!(
//!             "scan {} at {:.3} min: {} points, TIC {}",
//!             scan.scan_number,
//!             scan.retention_time_min(),
//!             scan.points.len(),
//!             scan.tic
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Options
//!
//! ```rust,no_run
//! use qgd_rs::*;
//!
//! fn main() -> Result<()> {
//!     let options = DecodeOptions::default()
//!         .retention_time_tolerance_ms(10)
//!         .parallel(false);
//!     let reader = QgdReader::open_with("sample.qgd", options)?;
//!
//!     // TIC only, without touching the scan blocks
//!     let tic = reader.read_tic()?;
//!     println!("{} TIC points", tic.len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod options;
pub mod container;
pub mod raw_data;
pub mod metadata;
pub mod scan;
pub mod dataset;
pub mod reader;
mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{QgdError, Result};

pub use types::{
    DecodeWarning,
    MzIntensityPair,
    RetentionTimeSeries,
    ScanRecord,
    TicSeries,
    WidthCorrection,
    MZ_SCALE,
    SATURATED_INTENSITY_MASK,
};

pub use options::DecodeOptions;

pub use container::{Container, QgdStreams};

pub use raw_data::{decode_retention_times, decode_tic};

pub use metadata::{decode_spectrum_index, SpectrumIndex};

pub use scan::{resolve_intensity_width, DecodedScan, ScanBlockParser, ScanHeader, SCAN_HEADER_SIZE};

pub use dataset::{assemble, Dataset, DecodeOutput, LongRow, TicPoint, WideTable};

pub use reader::{decode_file, decode_file_with, QgdReader};

#[cfg(feature = "async")]
pub use reader::{decode_async, decode_file_async};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use qgd_rs::prelude::*;
    //! ```

    pub use crate::dataset::{Dataset, DecodeOutput};
    pub use crate::error::{QgdError, Result};
    pub use crate::options::DecodeOptions;
    pub use crate::reader::{decode_file, QgdReader};
    pub use crate::types::{DecodeWarning, MzIntensityPair, ScanRecord};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
