//! Fixed-layout little-endian helpers
//!
//! Callers check the buffer length up front; every helper here indexes
//! directly and panics on an out-of-range offset.

/// Read u16 little-endian from slice
#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Read u32 little-endian from slice
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read i32 little-endian from slice
#[inline]
pub fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    read_u32_le(data, offset) as i32
}

/// Copy `N` raw bytes starting at `offset`
#[inline]
pub fn read_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}

/// Write u16 little-endian to slice
#[inline]
pub fn write_u16_le(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Write u32 little-endian to slice
#[inline]
pub fn write_u32_le(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Write i32 little-endian to slice
#[inline]
pub fn write_i32_le(data: &mut [u8], offset: usize, value: i32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_read_keeps_sign() {
        let bytes = (-100i32).to_le_bytes();
        assert_eq!(read_i32_le(&bytes, 0), -100);
        assert_eq!(read_u32_le(&bytes, 0), 0xFFFF_FF9C);
    }

    #[test]
    fn test_reads_at_offset() {
        let data = [0xAA, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(read_u16_le(&data, 1), 0x1234);
        assert_eq!(read_u32_le(&data, 3), 0x1234_5678);
        assert_eq!(read_array::<2>(&data, 0), [0xAA, 0x34]);
    }

    #[test]
    fn test_writes_at_offset() {
        let mut data = [0u8; 10];
        write_u16_le(&mut data, 0, 0x4D42);
        write_u32_le(&mut data, 2, 0x0000_0036);
        write_i32_le(&mut data, 6, -1);
        assert_eq!(data, [0x42, 0x4D, 0x36, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    }
}
