//! BMP header encoder - inverse of the decoder

use crate::utils::{write_i32_le, write_u16_le, write_u32_le};

use super::types::{ParsedBitmapHeader, HEADER_LEN};

/// Serialize both header records into their 54-byte on-disk layout.
///
/// Every field is written verbatim, including the reserved words, so
/// decoding the output yields the same header.
pub fn encode_header(header: &ParsedBitmapHeader) -> [u8; HEADER_LEN] {
    let fh = &header.file_header;
    let ih = &header.info_header;
    let mut output = [0u8; HEADER_LEN];

    // File header (14 bytes)
    output[0..2].copy_from_slice(&fh.signature);
    write_u32_le(&mut output, 2, fh.file_size);
    write_u16_le(&mut output, 6, fh.reserved1);
    write_u16_le(&mut output, 8, fh.reserved2);
    write_u32_le(&mut output, 10, fh.data_offset);

    // BITMAPINFOHEADER (40 bytes)
    write_u32_le(&mut output, 14, ih.header_size);
    write_i32_le(&mut output, 18, ih.width);
    write_i32_le(&mut output, 22, ih.height);
    write_u16_le(&mut output, 26, ih.planes);
    write_u16_le(&mut output, 28, ih.bit_count);
    write_u32_le(&mut output, 30, ih.compression);
    write_u32_le(&mut output, 34, ih.image_size);
    write_i32_le(&mut output, 38, ih.x_pixels_per_meter);
    write_i32_le(&mut output, 42, ih.y_pixels_per_meter);
    write_u32_le(&mut output, 46, ih.colors_used);
    write_u32_le(&mut output, 50, ih.colors_important);

    output
}
