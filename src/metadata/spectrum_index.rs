// src/metadata/spectrum_index.rs
use crate::container::SPECTRUM_INDEX_STREAM;
use crate::error::{QgdError, Result};
use crate::raw_data::check_width;
use crate::utils::read_u32_vec;
use std::ops::Range;

/// Width in bytes of one spectrum index entry (little-endian `u32`)
pub const SPECTRUM_INDEX_ENTRY_WIDTH: usize = 4;

/// Whether instrument files store a trailing end-of-stream offset.
///
/// They do not: the index holds one start offset per scan and the last block
/// runs to the end of `MS Raw Data`, so a trailing entry equal to the stream
/// length is optional and dropped when present. When set, [`SpectrumIndex::bind`]
/// requires that trailing entry instead.
pub const SPECTRUM_INDEX_STORES_END_SENTINEL: bool = false;

/// Scan block boundaries inside the `MS Raw Data` stream
///
/// This is the only trusted source of block lengths. Offsets are strictly
/// increasing; block `i` spans `offsets[i]..offsets[i + 1]`, and the last block
/// ends at the stream end supplied through [`SpectrumIndex::bind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrumIndex {
    offsets: Vec<u64>,
    stream_end: Option<u64>,
    explicit_sentinel: bool,
}

impl SpectrumIndex {
    /// Decode the raw `Spectrum Index` stream
    ///
    /// ```
    /// use qgd_rs::metadata::SpectrumIndex;
    ///
    /// let data = [0u8, 0, 0, 0, 40, 0, 0, 0];
    /// let index = SpectrumIndex::decode(&data).unwrap().bind(100).unwrap();
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.block_range(1), Some(40..100));
    /// ```
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        check_width(SPECTRUM_INDEX_STREAM, buffer, SPECTRUM_INDEX_ENTRY_WIDTH)?;

        Self::from_offsets(read_u32_vec(buffer).into_iter().map(u64::from).collect())
    }

    /// Build an index from already decoded offsets, checking monotonicity
    pub fn from_offsets(offsets: Vec<u64>) -> Result<Self> {
        for (position, pair) in offsets.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(QgdError::MalformedIndex {
                    position: position + 1,
                    previous: pair[0],
                    offset: pair[1],
                    reason: "offsets not strictly increasing",
                });
            }
        }

        Ok(SpectrumIndex {
            offsets,
            stream_end: None,
            explicit_sentinel: false,
        })
    }

    /// Attach the length of the `MS Raw Data` stream
    ///
    /// Drops a trailing sentinel equal to `stream_len` and rejects offsets
    /// past the end of the stream. Whether the sentinel is mandatory follows
    /// [`SPECTRUM_INDEX_STORES_END_SENTINEL`].
    pub fn bind(self, stream_len: u64) -> Result<Self> {
        self.bind_with(stream_len, SPECTRUM_INDEX_STORES_END_SENTINEL)
    }

    fn bind_with(mut self, stream_len: u64, sentinel_required: bool) -> Result<Self> {
        match self.offsets.last().copied() {
            Some(last) if last == stream_len => {
                if !sentinel_required {
                    log::debug!("spectrum index carries an explicit end offset {}", last);
                }
                self.offsets.pop();
                self.explicit_sentinel = true;
            }
            Some(last) if last > stream_len => {
                return Err(QgdError::MalformedIndex {
                    position: self.offsets.len() - 1,
                    previous: stream_len,
                    offset: last,
                    reason: "offset beyond end of MS Raw Data",
                });
            }
            last if sentinel_required => {
                return Err(QgdError::MalformedIndex {
                    position: self.offsets.len(),
                    previous: last.unwrap_or(0),
                    offset: stream_len,
                    reason: "missing end offset",
                });
            }
            _ => {}
        }

        self.stream_end = Some(stream_len);
        Ok(self)
    }

    /// Number of scans described by the index
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    pub fn stream_end(&self) -> Option<u64> {
        self.stream_end
    }

    /// True when the stored index ended with an explicit end offset
    pub fn had_explicit_sentinel(&self) -> bool {
        self.explicit_sentinel
    }

    /// Byte range of scan `i`. `None` past the end, or for the last scan of an unbound index.
    pub fn block_range(&self, i: usize) -> Option<Range<u64>> {
        let start = *self.offsets.get(i)?;
        let end = match self.offsets.get(i + 1) {
            Some(&next) => next,
            None => self.stream_end?,
        };
        Some(start..end)
    }
}

/// Decode the `Spectrum Index` stream
pub fn decode_spectrum_index(buffer: &[u8]) -> Result<SpectrumIndex> {
    SpectrumIndex::decode(buffer)
}
