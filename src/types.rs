// src/types.rs
use std::fmt;
use std::ops::Deref;

/// Scale factor applied to stored m/z values (`mz = mz_raw / MZ_SCALE`)
pub const MZ_SCALE: f64 = 20.0;

/// Milliseconds per minute, for retention time conversion
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Bit 31 of a 4-byte intensity is not a data bit on saturated scans
pub const SATURATED_INTENSITY_MASK: u32 = 0x7FFF_FFFF;

/// Retention times in milliseconds, one per scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionTimeSeries(pub Vec<i32>);

impl RetentionTimeSeries {
    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl Deref for RetentionTimeSeries {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

/// Total ion current per scan, index-aligned with [`RetentionTimeSeries`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicSeries(pub Vec<i64>);

impl TicSeries {
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl Deref for TicSeries {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

/// A single m/z and intensity data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MzIntensityPair {
    /// Stored m/z, scaled by [`MZ_SCALE`]
    pub mz_raw: u16,
    pub intensity: u32,
}

impl MzIntensityPair {
    pub fn new(mz_raw: u16, intensity: u32) -> Self {
        MzIntensityPair { mz_raw, intensity }
    }

    /// True m/z value
    pub fn mz(&self) -> f64 {
        self.mz_raw as f64 / MZ_SCALE
    }
}

/// Repair applied to a scan whose header declared the wrong intensity width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthCorrection {
    pub declared: u16,
    pub corrected: u16,
}

/// One assembled scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub scan_number: usize,
    pub retention_time_ms: i32,
    pub tic: i64,
    pub points: Vec<MzIntensityPair>,
    pub correction: Option<WidthCorrection>,
}

impl ScanRecord {
    pub fn retention_time_min(&self) -> f64 {
        self.retention_time_ms as f64 / MS_PER_MINUTE
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the decoded intensities, which need not equal the stored TIC
    pub fn summed_intensity(&self) -> u64 {
        self.points.iter().map(|p| p.intensity as u64).sum()
    }
}

/// Recoverable anomaly found while decoding. Decoding continues after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Header intensity width disagreed with the spectrum index and was replaced
    ScanWidthCorrected {
        scan_number: usize,
        declared: u16,
        corrected: u16,
    },
    /// Header retention time differs from the retention time stream
    RetentionTimeDrift {
        scan_number: usize,
        header_ms: i32,
        series_ms: i32,
    },
    /// Header scan number differs from the scan's position in the index
    ScanNumberMismatch {
        scan_number: usize,
        header_scan_number: i32,
    },
    /// Header point count differs from the count implied by the block length
    PointCountMismatch {
        scan_number: usize,
        declared: u16,
        derived: usize,
    },
}

impl DecodeWarning {
    pub fn scan_number(&self) -> usize {
        match *self {
            DecodeWarning::ScanWidthCorrected { scan_number, .. }
            | DecodeWarning::RetentionTimeDrift { scan_number, .. }
            | DecodeWarning::ScanNumberMismatch { scan_number, .. }
            | DecodeWarning::PointCountMismatch { scan_number, .. } => scan_number,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DecodeWarning::ScanWidthCorrected { .. } => "ScanWidthCorrected",
            DecodeWarning::RetentionTimeDrift { .. } => "RetentionTimeDrift",
            DecodeWarning::ScanNumberMismatch { .. } => "ScanNumberMismatch",
            DecodeWarning::PointCountMismatch { .. } => "PointCountMismatch",
        }
    }
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::ScanWidthCorrected { scan_number, declared, corrected } => write!(
                f,
                "scan {}: corrected intensity width from {} to {}",
                scan_number, declared, corrected
            ),
            DecodeWarning::RetentionTimeDrift { scan_number, header_ms, series_ms } => write!(
                f,
                "scan {}: header retention time {} ms differs from stream value {} ms",
                scan_number, header_ms, series_ms
            ),
            DecodeWarning::ScanNumberMismatch { scan_number, header_scan_number } => write!(
                f,
                "scan {}: header carries scan number {}",
                scan_number, header_scan_number
            ),
            DecodeWarning::PointCountMismatch { scan_number, declared, derived } => write!(
                f,
                "scan {}: header declares {} points, block holds {}",
                scan_number, declared, derived
            ),
        }
    }
}
