// src/reader/qgd_reader.rs
use crate::container::{Container, QgdStreams, ReadSeek};
use crate::dataset::{assemble, check_lengths, DecodeOutput, TicPoint};
use crate::error::Result;
use crate::metadata::SpectrumIndex;
use crate::options::DecodeOptions;
use crate::raw_data::{decode_retention_times, decode_tic};
use crate::scan::ScanBlockParser;
use crate::types::{RetentionTimeSeries, MS_PER_MINUTE};
use std::path::Path;

/// End-to-end QGD decoder
///
/// Opening loads the four raw streams into memory and releases the file.
/// Decoding is then a pure function of those bytes, so calling
/// [`QgdReader::decode`] twice yields identical output.
///
/// ```no_run
/// use qgd_rs::QgdReader;
///
/// let reader = QgdReader::open("sample.qgd").unwrap();
/// let output = reader.decode().unwrap();
/// for warning in &output.warnings {
///     eprintln!("{}", warning);
/// }
/// println!("{} scans", output.dataset.len());
/// ```
#[derive(Debug, Clone)]
pub struct QgdReader {
    streams: QgdStreams,
    options: DecodeOptions,
}

impl QgdReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, DecodeOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let mut container = Container::open(path)?;
        Self::load(&mut container, options)
    }

    /// Open through a read-only memory map (requires "mmap" feature)
    #[cfg(feature = "mmap")]
    pub fn open_mmap(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let mut container = Container::open_mmap(path)?;
        Self::load(&mut container, options)
    }

    /// Read from any seekable source holding a compound document
    pub fn from_reader<R: ReadSeek>(reader: R, options: DecodeOptions) -> Result<Self> {
        let mut container = Container::from_reader(reader)?;
        Self::load(&mut container, options)
    }

    /// Use streams that were already extracted
    pub fn from_streams(streams: QgdStreams, options: DecodeOptions) -> Self {
        QgdReader { streams, options }
    }

    fn load<F: ReadSeek>(container: &mut Container<F>, options: DecodeOptions) -> Result<Self> {
        let streams = QgdStreams::load(container, &options.storage)?;
        log::debug!(
            "loaded {}: retention time {} B, TIC {} B, index {} B, MS raw data {} B",
            container.source().display(),
            streams.retention_time.len(),
            streams.tic.len(),
            streams.spectrum_index.len(),
            streams.ms_raw_data.len()
        );
        Ok(QgdReader { streams, options })
    }

    pub fn streams(&self) -> &QgdStreams {
        &self.streams
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn retention_times(&self) -> Result<RetentionTimeSeries> {
        decode_retention_times(&self.streams.retention_time)
    }

    /// The spectrum index, bound to the length of `MS Raw Data`
    pub fn spectrum_index(&self) -> Result<SpectrumIndex> {
        SpectrumIndex::decode(&self.streams.spectrum_index)?
            .bind(self.streams.ms_raw_data.len() as u64)
    }

    /// Decode only the total ion chromatogram, skipping the scan blocks
    pub fn read_tic(&self) -> Result<Vec<TicPoint>> {
        let rt = self.retention_times()?;
        let tic = decode_tic(&self.streams.tic)?;
        check_lengths(rt.len(), tic.len(), rt.len())?;

        Ok(rt
            .iter()
            .zip(tic.iter())
            .map(|(&retention_time_ms, &tic)| TicPoint {
                retention_time_ms,
                retention_time_min: retention_time_ms as f64 / MS_PER_MINUTE,
                tic,
            })
            .collect())
    }

    /// Decode every scan into a [`Dataset`](crate::Dataset)
    pub fn decode(&self) -> Result<DecodeOutput> {
        let rt = self.retention_times()?;
        let tic = decode_tic(&self.streams.tic)?;
        let index = self.spectrum_index()?;
        check_lengths(rt.len(), tic.len(), index.len())?;

        log::debug!("decoding {} scans", index.len());
        let scans = ScanBlockParser::new(&self.streams.ms_raw_data, &index, &rt, &self.options)
            .decode_all()?;

        let output = assemble(rt, tic, scans)?;
        if !output.warnings.is_empty() {
            log::info!(
                "decoded {} scans with {} warnings",
                output.dataset.len(),
                output.warnings.len()
            );
        }
        Ok(output)
    }
}

/// Open and decode a QGD file with default options
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodeOutput> {
    QgdReader::open(path)?.decode()
}

pub fn decode_file_with(path: impl AsRef<Path>, options: DecodeOptions) -> Result<DecodeOutput> {
    QgdReader::open_with(path, options)?.decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QgdError;
    use crate::scan::ScanHeader;
    use bytes::Bytes;

    fn streams(rt: &[i32], tic: &[i64], offsets: &[u32], ms: Vec<u8>) -> QgdStreams {
        QgdStreams {
            retention_time: Bytes::from(rt.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<u8>>()),
            tic: Bytes::from(tic.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<u8>>()),
            spectrum_index: Bytes::from(offsets.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<u8>>()),
            ms_raw_data: Bytes::from(ms),
        }
    }

    fn one_scan_block() -> Vec<u8> {
        let header = ScanHeader {
            scan_number: 0,
            retention_time_ms: 1500,
            intensity_width: 2,
            point_count: 1,
        };
        let mut block = header.to_bytes().to_vec();
        block.extend_from_slice(&[0xBC, 0x02, 0x10, 0x00]);
        block
    }

    #[test]
    fn test_decode_from_streams() {
        let reader = QgdReader::from_streams(
            streams(&[1500], &[16], &[0], one_scan_block()),
            DecodeOptions::default(),
        );
        let output = reader.decode().unwrap();
        assert_eq!(output.dataset.len(), 1);
        let scan = &output.dataset.scans()[0];
        assert_eq!(scan.tic, 16);
        assert_eq!(scan.points[0].mz(), 35.0);
        assert_eq!(scan.points[0].intensity, 16);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_read_tic_only() {
        let reader = QgdReader::from_streams(
            streams(&[0, 30_000], &[5, 6], &[], Vec::new()),
            DecodeOptions::default(),
        );
        let tic = reader.read_tic().unwrap();
        assert_eq!(tic.len(), 2);
        assert_eq!(tic[1].retention_time_min, 0.5);
        assert_eq!(tic[1].tic, 6);
    }

    #[test]
    fn test_index_length_mismatch() {
        let reader = QgdReader::from_streams(
            streams(&[1500, 1600], &[16, 17], &[0], one_scan_block()),
            DecodeOptions::default(),
        );
        assert!(matches!(
            reader.decode(),
            Err(QgdError::LengthMismatch { retention_times: 2, tic: 2, scans: 1 })
        ));
    }

    #[test]
    fn test_malformed_retention_times_fail_fast() {
        let mut s = streams(&[1500], &[16], &[0], one_scan_block());
        s.retention_time = Bytes::from_static(&[1, 2, 3]);
        let reader = QgdReader::from_streams(s, DecodeOptions::default());
        assert!(matches!(reader.decode(), Err(QgdError::MalformedStream { .. })));
    }
}
