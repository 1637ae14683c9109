//! BMP header decoder - pure Rust implementation

use std::io::{ErrorKind, Read};

use crate::utils::{read_array, read_i32_le, read_u16_le, read_u32_le};

use super::error::{DecodeError, Result};
use super::options::DecodeOptions;
use super::types::{
    FileHeader, InfoHeader, ParsedBitmapHeader, BMP_SIGNATURE, FILE_HEADER_LEN, HEADER_LEN,
    INFO_HEADER_LEN,
};

/// Decode the file and info headers from the start of `source` using the
/// default (lenient) profile.
pub fn decode<R: Read>(source: R) -> Result<ParsedBitmapHeader> {
    decode_with(source, &DecodeOptions::default())
}

/// Decode from an in-memory buffer. Bytes past the header are ignored.
pub fn decode_slice(data: &[u8]) -> Result<ParsedBitmapHeader> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode the file and info headers from the start of `source`.
///
/// Consumes at most 54 bytes. On error nothing read so far is exposed.
pub fn decode_with<R: Read>(mut source: R, options: &DecodeOptions) -> Result<ParsedBitmapHeader> {
    let mut raw = [0u8; HEADER_LEN];

    // File header
    let have = read_fully(&mut source, &mut raw[..FILE_HEADER_LEN])?;
    if have < FILE_HEADER_LEN {
        return Err(DecodeError::TruncatedInput { have, need: HEADER_LEN });
    }

    // Info header
    let have = read_fully(&mut source, &mut raw[FILE_HEADER_LEN..])?;
    if have < INFO_HEADER_LEN {
        return Err(DecodeError::TruncatedInput {
            have: FILE_HEADER_LEN + have,
            need: HEADER_LEN,
        });
    }

    let header = parse_header(&raw);

    if header.file_header.signature != BMP_SIGNATURE {
        return Err(DecodeError::InvalidSignature {
            observed: header.file_header.signature,
        });
    }

    check_profile(&header.info_header, options)?;

    log::debug!(
        "Decoded BMP header: {}x{}, {} bpp, compression {}",
        header.info_header.width,
        header.info_header.height,
        header.info_header.bit_count,
        header.info_header.compression
    );

    Ok(header)
}

/// Decode independent buffers, preserving input order.
///
/// With the `threads` feature the buffers are decoded in parallel.
pub fn decode_many(buffers: &[&[u8]], options: &DecodeOptions) -> Vec<Result<ParsedBitmapHeader>> {
    #[cfg(feature = "threads")]
    {
        use rayon::prelude::*;
        buffers
            .par_iter()
            .map(|data| decode_with(*data, options))
            .collect()
    }
    #[cfg(not(feature = "threads"))]
    {
        buffers
            .iter()
            .map(|data| decode_with(*data, options))
            .collect()
    }
}

/// Extract every field at its fixed offset. No validation.
pub fn parse_header(raw: &[u8; HEADER_LEN]) -> ParsedBitmapHeader {
    let file_header = FileHeader {
        signature: read_array::<2>(raw, 0),
        file_size: read_u32_le(raw, 2),
        reserved1: read_u16_le(raw, 6),
        reserved2: read_u16_le(raw, 8),
        data_offset: read_u32_le(raw, 10),
    };

    let info_header = InfoHeader {
        header_size: read_u32_le(raw, 14),
        width: read_i32_le(raw, 18),
        height: read_i32_le(raw, 22),
        planes: read_u16_le(raw, 26),
        bit_count: read_u16_le(raw, 28),
        compression: read_u32_le(raw, 30),
        image_size: read_u32_le(raw, 34),
        x_pixels_per_meter: read_i32_le(raw, 38),
        y_pixels_per_meter: read_i32_le(raw, 42),
        colors_used: read_u32_le(raw, 46),
        colors_important: read_u32_le(raw, 50),
    };

    ParsedBitmapHeader {
        file_header,
        info_header,
    }
}

fn check_profile(info: &InfoHeader, options: &DecodeOptions) -> Result<()> {
    if !info.is_rgb24() {
        if options.is_strict() {
            return Err(DecodeError::UnsupportedFormat {
                bit_depth: info.bit_count,
                compression: info.compression,
            });
        }

        log::warn!(
            "BMP header outside the 24-bit uncompressed profile: {} bpp, compression {}",
            info.bit_count,
            info.compression
        );
    }

    if info.header_size != INFO_HEADER_LEN as u32 {
        log::warn!("Unexpected BMP info header size: {}", info.header_size);
    }
    if info.planes != 1 {
        log::warn!("Unexpected BMP color plane count: {}", info.planes);
    }

    Ok(())
}

/// Fill `buf` from `source`, stopping early only at end of input.
///
/// Returns the number of bytes read.
fn read_fully<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
