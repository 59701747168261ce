// src/dataset/projection.rs
//! Table-shaped views over a [`Dataset`]
//!
//! These are pure projections for callers that serialize the data; nothing
//! here writes files.

use crate::dataset::Dataset;
use crate::types::{MS_PER_MINUTE, MZ_SCALE};
use std::collections::BTreeMap;

/// One point of the total ion chromatogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicPoint {
    pub retention_time_ms: i32,
    pub retention_time_min: f64,
    pub tic: i64,
}

/// One m/z and intensity pair with its scan context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongRow {
    pub scan_number: usize,
    pub retention_time_ms: i32,
    pub retention_time_min: f64,
    pub mz: f64,
    pub intensity: u32,
}

/// One scan with intensities summed into nominal-mass bins
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub scan_number: usize,
    pub retention_time_ms: i32,
    pub retention_time_min: f64,
    pub total_intensity: u64,
    /// Aligned with [`WideTable::mz_bins`]
    pub intensities: Vec<u64>,
}

/// Scans by nominal mass matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WideTable {
    /// Ascending nominal masses present in any scan
    pub mz_bins: Vec<u32>,
    pub rows: Vec<WideRow>,
}

/// Nominal (integer) mass of a stored m/z value, rounding halves to even
pub fn nominal_mass(mz_raw: u16) -> u32 {
    let scale = MZ_SCALE as u32;
    let (whole, frac) = (mz_raw as u32 / scale, mz_raw as u32 % scale);
    match (frac * 2).cmp(&scale) {
        std::cmp::Ordering::Less => whole,
        std::cmp::Ordering::Greater => whole + 1,
        std::cmp::Ordering::Equal => whole + (whole % 2),
    }
}

impl Dataset {
    /// Retention time and TIC for every scan
    pub fn tic_chromatogram(&self) -> Vec<TicPoint> {
        self.iter()
            .map(|scan| TicPoint {
                retention_time_ms: scan.retention_time_ms,
                retention_time_min: scan.retention_time_ms as f64 / MS_PER_MINUTE,
                tic: scan.tic,
            })
            .collect()
    }

    /// Every data point as a flat row, in scan order
    pub fn long_rows(&self) -> impl Iterator<Item = LongRow> + '_ {
        self.iter().flat_map(|scan| {
            let retention_time_min = scan.retention_time_min();
            scan.points.iter().map(move |point| LongRow {
                scan_number: scan.scan_number,
                retention_time_ms: scan.retention_time_ms,
                retention_time_min,
                mz: point.mz(),
                intensity: point.intensity,
            })
        })
    }

    /// Pivot into one row per scan and one column per nominal mass
    pub fn wide_table(&self) -> WideTable {
        let mut columns: BTreeMap<u32, usize> = self
            .iter()
            .flat_map(|scan| scan.points.iter().map(|p| (nominal_mass(p.mz_raw), 0)))
            .collect();
        for (position, column) in columns.values_mut().enumerate() {
            *column = position;
        }

        let rows = self
            .iter()
            .map(|scan| {
                let mut intensities = vec![0u64; columns.len()];
                for point in &scan.points {
                    intensities[columns[&nominal_mass(point.mz_raw)]] += point.intensity as u64;
                }
                WideRow {
                    scan_number: scan.scan_number,
                    retention_time_ms: scan.retention_time_ms,
                    retention_time_min: scan.retention_time_min(),
                    total_intensity: intensities.iter().sum(),
                    intensities,
                }
            })
            .collect();

        WideTable {
            mz_bins: columns.into_keys().collect(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::assemble;
    use crate::scan::{DecodedScan, ScanHeader};
    use crate::types::{MzIntensityPair, RetentionTimeSeries, TicSeries};

    fn dataset(scans: Vec<Vec<(u16, u32)>>) -> Dataset {
        let n = scans.len();
        let decoded = scans
            .into_iter()
            .enumerate()
            .map(|(i, pairs)| DecodedScan {
                scan_number: i,
                header: ScanHeader {
                    scan_number: i as i32,
                    retention_time_ms: 0,
                    intensity_width: 4,
                    point_count: pairs.len() as u16,
                },
                width: 4,
                block_len: ScanHeader::SIZE + pairs.len() * 6,
                points: pairs.into_iter().map(|(mz, i)| MzIntensityPair::new(mz, i)).collect(),
                correction: None,
                warnings: Vec::new(),
            })
            .collect();
        let rts = (0..n as i32).map(|i| (i + 1) * 30_000).collect();
        let tic = (0..n as i64).map(|i| i * 100).collect();
        assemble(RetentionTimeSeries(rts), TicSeries(tic), decoded).unwrap().dataset
    }

    #[test]
    fn test_nominal_mass_rounding() {
        assert_eq!(nominal_mass(700), 35); // 35.0
        assert_eq!(nominal_mass(709), 35); // 35.45
        assert_eq!(nominal_mass(711), 36); // 35.55
        assert_eq!(nominal_mass(710), 36); // 35.5 -> 36
        assert_eq!(nominal_mass(730), 36); // 36.5 -> 36
        assert_eq!(nominal_mass(0), 0);
    }

    #[test]
    fn test_tic_chromatogram() {
        let ds = dataset(vec![vec![], vec![(700, 1)]]);
        let tic = ds.tic_chromatogram();
        assert_eq!(tic.len(), 2);
        assert_eq!(tic[1], TicPoint { retention_time_ms: 60_000, retention_time_min: 1.0, tic: 100 });
    }

    #[test]
    fn test_long_rows() {
        let ds = dataset(vec![vec![(700, 5), (701, 6)], vec![], vec![(1000, 7)]]);
        let rows: Vec<LongRow> = ds.long_rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].mz, 35.0);
        assert_eq!(rows[1].intensity, 6);
        assert_eq!(rows[2].scan_number, 2);
        assert_eq!(rows[2].retention_time_ms, 90_000);
        assert_eq!(rows[2].mz, 50.0);
    }

    #[test]
    fn test_wide_table_bins_and_totals() {
        let ds = dataset(vec![
            vec![(700, 5), (705, 6), (1000, 1)],
            vec![],
            vec![(711, 2)],
        ]);
        let table = ds.wide_table();
        assert_eq!(table.mz_bins, vec![35, 36, 50]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].intensities, vec![11, 0, 1]);
        assert_eq!(table.rows[0].total_intensity, 12);
        assert_eq!(table.rows[1].intensities, vec![0, 0, 0]);
        assert_eq!(table.rows[1].total_intensity, 0);
        assert_eq!(table.rows[2].intensities, vec![0, 2, 0]);
    }
}
