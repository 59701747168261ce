// src/raw_data/reader.rs
use crate::container::{RETENTION_TIME_STREAM, TIC_STREAM};
use crate::error::{QgdError, Result};
use crate::types::{RetentionTimeSeries, TicSeries};
use crate::utils::{read_i32_vec, read_i64_vec};

/// Width in bytes of one retention time entry
pub const RETENTION_TIME_WIDTH: usize = 4;

/// Width in bytes of one TIC entry
pub const TIC_WIDTH: usize = 8;

/// Decoders for the packed scalar streams of a QGD file
///
/// Both streams are tightly packed little-endian integers with no header.
/// A buffer whose length is not a whole number of elements is rejected
/// outright; no partial series is ever returned.
pub struct ScalarStreamReader;

impl ScalarStreamReader {
    /// Decode the retention time stream into milliseconds
    ///
    /// # Example
    ///
    /// ```
    /// use qgd_rs::raw_data::ScalarStreamReader;
    ///
    /// let data = vec![0xE8u8, 0x03, 0, 0, 0xD0, 0x07, 0, 0];
    /// let rt = ScalarStreamReader::retention_times(&data).unwrap();
    /// assert_eq!(&rt[..], &[1000, 2000]);
    /// ```
    pub fn retention_times(buffer: &[u8]) -> Result<RetentionTimeSeries> {
        check_width(RETENTION_TIME_STREAM, buffer, RETENTION_TIME_WIDTH)?;

        Ok(RetentionTimeSeries(read_i32_vec(buffer)))
    }

    /// Decode the total ion current stream
    pub fn tic(buffer: &[u8]) -> Result<TicSeries> {
        check_width(TIC_STREAM, buffer, TIC_WIDTH)?;

        Ok(TicSeries(read_i64_vec(buffer)))
    }
}

pub(crate) fn check_width(stream: &str, buffer: &[u8], element_width: usize) -> Result<()> {
    if buffer.len() % element_width != 0 {
        return Err(QgdError::MalformedStream {
            stream: stream.to_string(),
            byte_len: buffer.len(),
            element_width,
        });
    }
    Ok(())
}

/// Decode the `Retention Time` stream
pub fn decode_retention_times(buffer: &[u8]) -> Result<RetentionTimeSeries> {
    ScalarStreamReader::retention_times(buffer)
}

/// Decode the `TIC Data` stream
pub fn decode_tic(buffer: &[u8]) -> Result<TicSeries> {
    ScalarStreamReader::tic(buffer)
}
