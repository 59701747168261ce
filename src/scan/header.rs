// src/scan/header.rs
use byteorder::{ByteOrder, LittleEndian};

/// Fixed header at the start of every scan block
///
/// Layout (little-endian):
///
/// | offset | width | field |
/// |---|---|---|
/// | 0 | 4 | scan number |
/// | 4 | 4 | retention time (ms) |
/// | 8 | 12 | reserved |
/// | 20 | 2 | intensity width in bytes |
/// | 22 | 2 | point count |
/// | 24 | 8 | reserved |
///
/// Every field is advisory. Block boundaries come from the spectrum index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHeader {
    pub scan_number: i32,
    pub retention_time_ms: i32,
    pub intensity_width: u16,
    pub point_count: u16,
}

impl ScanHeader {
    pub const SIZE: usize = 32;
    const SCAN_NUMBER_OFFSET: usize = 0;
    const RETENTION_TIME_OFFSET: usize = 4;
    const INTENSITY_WIDTH_OFFSET: usize = 20;
    const POINT_COUNT_OFFSET: usize = 22;

    /// Parse a header from the start of `block`. `None` if fewer than 32 bytes.
    pub fn parse(block: &[u8]) -> Option<Self> {
        let bytes = block.get(..Self::SIZE)?;

        Some(ScanHeader {
            scan_number: LittleEndian::read_i32(&bytes[Self::SCAN_NUMBER_OFFSET..]),
            retention_time_ms: LittleEndian::read_i32(&bytes[Self::RETENTION_TIME_OFFSET..]),
            intensity_width: LittleEndian::read_u16(&bytes[Self::INTENSITY_WIDTH_OFFSET..]),
            point_count: LittleEndian::read_u16(&bytes[Self::POINT_COUNT_OFFSET..]),
        })
    }

    /// Serialize with zeroed reserved fields
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        LittleEndian::write_i32(&mut bytes[Self::SCAN_NUMBER_OFFSET..], self.scan_number);
        LittleEndian::write_i32(&mut bytes[Self::RETENTION_TIME_OFFSET..], self.retention_time_ms);
        LittleEndian::write_u16(&mut bytes[Self::INTENSITY_WIDTH_OFFSET..], self.intensity_width);
        LittleEndian::write_u16(&mut bytes[Self::POINT_COUNT_OFFSET..], self.point_count);
        bytes
    }
}
