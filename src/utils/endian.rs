// src/utils/endian.rs
use byteorder::{ByteOrder, LittleEndian};

/// Decode packed little-endian `i32` values; trailing bytes that do not form
/// a whole value are ignored.
pub fn read_i32_vec(buffer: &[u8]) -> Vec<i32> {
    let mut values = vec![0i32; buffer.len() / 4];
    LittleEndian::read_i32_into(&buffer[..values.len() * 4], &mut values);
    values
}

pub fn read_i64_vec(buffer: &[u8]) -> Vec<i64> {
    let mut values = vec![0i64; buffer.len() / 8];
    LittleEndian::read_i64_into(&buffer[..values.len() * 8], &mut values);
    values
}

pub fn read_u32_vec(buffer: &[u8]) -> Vec<u32> {
    let mut values = vec![0u32; buffer.len() / 4];
    LittleEndian::read_u32_into(&buffer[..values.len() * 4], &mut values);
    values
}

/// Read an unsigned little-endian integer of `width` bytes (1 to 8)
pub fn read_uint_le(bytes: &[u8], width: usize) -> u64 {
    LittleEndian::read_uint(bytes, width)
}

pub fn read_u16_le(bytes: &[u8]) -> u16 {
    LittleEndian::read_u16(bytes)
}
