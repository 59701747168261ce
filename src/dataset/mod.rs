// src/dataset/mod.rs
//! Joining decoded streams into the final [`Dataset`]

mod projection;

pub use projection::{nominal_mass, LongRow, TicPoint, WideRow, WideTable};

use crate::error::{QgdError, Result};
use crate::scan::DecodedScan;
use crate::types::{DecodeWarning, RetentionTimeSeries, ScanRecord, TicSeries, WidthCorrection};

/// Ordered scans of one file, scan numbers `0..len()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    scans: Vec<ScanRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    pub fn scans(&self) -> &[ScanRecord] {
        &self.scans
    }

    pub fn get(&self, scan_number: usize) -> Option<&ScanRecord> {
        self.scans.get(scan_number)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScanRecord> {
        self.scans.iter()
    }

    pub fn into_scans(self) -> Vec<ScanRecord> {
        self.scans
    }

    /// Number of m/z and intensity pairs over all scans
    pub fn total_points(&self) -> usize {
        self.scans.iter().map(|s| s.points.len()).sum()
    }

    /// Scans whose intensity width was repaired
    pub fn corrections(&self) -> impl Iterator<Item = (usize, WidthCorrection)> + '_ {
        self.scans
            .iter()
            .filter_map(|s| s.correction.map(|c| (s.scan_number, c)))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ScanRecord;
    type IntoIter = std::slice::Iter<'a, ScanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.scans.iter()
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutput {
    pub dataset: Dataset,
    /// Recoverable anomalies in scan order
    pub warnings: Vec<DecodeWarning>,
}

/// Fail unless the three scan-indexed series have the same length
pub fn check_lengths(retention_times: usize, tic: usize, scans: usize) -> Result<()> {
    if retention_times != tic || tic != scans {
        return Err(QgdError::LengthMismatch {
            retention_times,
            tic,
            scans,
        });
    }
    Ok(())
}

/// Join retention times, TIC values and decoded scans by scan index
///
/// `scans` must be in index order, as returned by
/// [`ScanBlockParser::decode_all`](crate::scan::ScanBlockParser::decode_all);
/// a scan whose number differs from its position is rejected with
/// [`QgdError::ScanOutOfOrder`]. Retention times come from the retention time
/// stream, not scan headers.
pub fn assemble(
    retention_times: RetentionTimeSeries,
    tic: TicSeries,
    scans: Vec<DecodedScan>,
) -> Result<DecodeOutput> {
    check_lengths(retention_times.len(), tic.len(), scans.len())?;

    let mut warnings = Vec::new();
    let mut records = Vec::with_capacity(scans.len());
    for (position, ((scan, retention_time_ms), tic)) in scans
        .into_iter()
        .zip(retention_times.into_inner())
        .zip(tic.into_inner())
        .enumerate()
    {
        if scan.scan_number != position {
            return Err(QgdError::ScanOutOfOrder {
                position,
                scan_number: scan.scan_number,
            });
        }
        warnings.extend(scan.warnings);
        records.push(ScanRecord {
            scan_number: scan.scan_number,
            retention_time_ms,
            tic,
            points: scan.points,
            correction: scan.correction,
        });
    }

    Ok(DecodeOutput {
        dataset: Dataset { scans: records },
        warnings,
    })
}
