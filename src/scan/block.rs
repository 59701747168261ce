// src/scan/block.rs
use crate::error::{QgdError, Result};
use crate::metadata::SpectrumIndex;
use crate::options::DecodeOptions;
use crate::scan::header::ScanHeader;
use crate::scan::width::{pair_size, resolve_intensity_width, MAX_INTENSITY_WIDTH};
use crate::types::{DecodeWarning, MzIntensityPair, WidthCorrection, SATURATED_INTENSITY_MASK};
use crate::utils::{read_u16_le, read_uint_le};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A scan block decoded from `MS Raw Data`, before it is joined with the scalar streams
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedScan {
    /// Position in the spectrum index
    pub scan_number: usize,
    pub header: ScanHeader,
    /// Intensity width actually used
    pub width: u16,
    /// Block length according to the spectrum index
    pub block_len: usize,
    pub points: Vec<MzIntensityPair>,
    pub correction: Option<WidthCorrection>,
    pub warnings: Vec<DecodeWarning>,
}

impl DecodedScan {
    /// Bytes consumed by the header and all pairs. Always equals `block_len`.
    pub fn consumed_len(&self) -> usize {
        ScanHeader::SIZE + self.points.len() * pair_size(self.width)
    }
}

/// Walks `MS Raw Data` scan by scan using the spectrum index as ground truth
///
/// Each scan reads only its own byte range, so scans can be decoded in any
/// order; [`ScanBlockParser::decode_all`] always returns them in index order.
pub struct ScanBlockParser<'a> {
    data: &'a [u8],
    index: &'a SpectrumIndex,
    retention_times: &'a [i32],
    options: &'a DecodeOptions,
}

impl<'a> ScanBlockParser<'a> {
    /// `retention_times` is used only to cross-check header retention times
    pub fn new(
        data: &'a [u8],
        index: &'a SpectrumIndex,
        retention_times: &'a [i32],
        options: &'a DecodeOptions,
    ) -> Self {
        ScanBlockParser {
            data,
            index,
            retention_times,
            options,
        }
    }

    pub fn scan_count(&self) -> usize {
        self.index.len()
    }

    /// Decode every scan, failing on the first fatal error in index order
    pub fn decode_all(&self) -> Result<Vec<DecodedScan>> {
        let results = if self.options.use_parallel() {
            self.decode_parallel()
        } else {
            (0..self.scan_count()).map(|i| self.decode_scan(i)).collect()
        };

        results.into_iter().collect()
    }

    #[cfg(feature = "parallel")]
    fn decode_parallel(&self) -> Vec<Result<DecodedScan>> {
        (0..self.scan_count())
            .into_par_iter()
            .map(|i| self.decode_scan(i))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn decode_parallel(&self) -> Vec<Result<DecodedScan>> {
        (0..self.scan_count()).map(|i| self.decode_scan(i)).collect()
    }

    /// Decode scan `i` of the index
    pub fn decode_scan(&self, i: usize) -> Result<DecodedScan> {
        let (start, end) = self.block_bounds(i)?;
        let block = &self.data[start..end];

        let header = ScanHeader::parse(block).ok_or(QgdError::TruncatedScan {
            scan_index: i,
            block_start: start as u64,
            available: block.len(),
        })?;

        let payload = &block[ScanHeader::SIZE..];
        let unresolvable = || QgdError::UnresolvableScanLength {
            scan_number: i,
            block_start: start as u64,
            expected_length: block.len(),
            declared_width: header.intensity_width,
            declared_points: header.point_count,
        };
        let resolution = resolve_intensity_width(
            payload.len(),
            header.intensity_width,
            header.point_count,
            &self.options.candidate_widths,
        )
        .ok_or_else(unresolvable)?;

        let mut warnings = Vec::new();

        if header.scan_number as i64 != i as i64 {
            warnings.push(DecodeWarning::ScanNumberMismatch {
                scan_number: i,
                header_scan_number: header.scan_number,
            });
        }

        let correction = if resolution.corrected {
            log::warn!(
                "scan {}: corrected intensity width from {} to {}",
                i,
                header.intensity_width,
                resolution.width
            );
            warnings.push(DecodeWarning::ScanWidthCorrected {
                scan_number: i,
                declared: header.intensity_width,
                corrected: resolution.width,
            });
            Some(WidthCorrection {
                declared: header.intensity_width,
                corrected: resolution.width,
            })
        } else {
            None
        };

        if resolution.point_count != header.point_count as usize {
            warnings.push(DecodeWarning::PointCountMismatch {
                scan_number: i,
                declared: header.point_count,
                derived: resolution.point_count,
            });
        }

        if let Some(&series_ms) = self.retention_times.get(i) {
            let drift = (header.retention_time_ms as i64 - series_ms as i64).unsigned_abs();
            if drift > self.options.retention_time_tolerance_ms as u64 {
                log::warn!(
                    "scan {}: header retention time {} ms, stream has {} ms",
                    i,
                    header.retention_time_ms,
                    series_ms
                );
                warnings.push(DecodeWarning::RetentionTimeDrift {
                    scan_number: i,
                    header_ms: header.retention_time_ms,
                    series_ms,
                });
            }
        }

        let points = decode_pairs(payload, resolution.width).ok_or_else(unresolvable)?;

        Ok(DecodedScan {
            scan_number: i,
            header,
            width: resolution.width,
            block_len: block.len(),
            points,
            correction,
            warnings,
        })
    }

    fn block_bounds(&self, i: usize) -> Result<(usize, usize)> {
        let offsets = self.index.offsets();
        let start = *offsets.get(i).ok_or(QgdError::MalformedIndex {
            position: i,
            previous: offsets.last().copied().unwrap_or(0),
            offset: 0,
            reason: "no such scan in index",
        })?;
        let end = offsets.get(i + 1).copied().unwrap_or(self.data.len() as u64);

        if end > self.data.len() as u64 || start >= end {
            return Err(QgdError::MalformedIndex {
                position: i,
                previous: start,
                offset: end,
                reason: "scan block outside MS Raw Data",
            });
        }

        Ok((start as usize, end as usize))
    }
}

/// Decode packed `(u16 mz, uN intensity)` pairs
///
/// Returns `None` when `width` is outside `1..=MAX_INTENSITY_WIDTH`. A trailing
/// partial pair is ignored.
///
/// ```
/// use qgd_rs::scan::decode_pairs;
///
/// let pairs = decode_pairs(&[0xBC, 0x02, 0x07], 1).unwrap();
/// assert_eq!(pairs[0].mz(), 35.0);
/// assert!(decode_pairs(&[1, 0, 2], 0).is_none());
/// ```
pub fn decode_pairs(payload: &[u8], width: u16) -> Option<Vec<MzIntensityPair>> {
    if !(1..=MAX_INTENSITY_WIDTH).contains(&width) {
        return None;
    }
    let width = width as usize;
    let pairs = payload
        .chunks_exact(2 + width)
        .map(|pair| {
            let mz_raw = read_u16_le(&pair[..2]);
            let mut intensity = read_uint_le(&pair[2..], width) as u32;
            if width == 4 {
                intensity &= SATURATED_INTENSITY_MASK;
            }
            MzIntensityPair { mz_raw, intensity }
        })
        .collect();
    Some(pairs)
}
