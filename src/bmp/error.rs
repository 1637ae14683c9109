//! Header decoding errors

use thiserror::Error;

/// Errors returned by the header decoder.
///
/// A decode that fails never yields a partial header.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The source ended before the full 54-byte header was read
    #[error("BMP header truncated: got {have} of {need} bytes")]
    TruncatedInput { have: usize, need: usize },

    /// First two bytes are not "BM"
    #[error("Invalid BMP signature: expected \"BM\", found {observed:02X?}")]
    InvalidSignature { observed: [u8; 2] },

    /// Rejected by the strict profile
    #[error("Unsupported BMP format: {bit_depth} bits per pixel, compression {compression}")]
    UnsupportedFormat { bit_depth: u16, compression: u32 },

    /// Dimensions that cannot be represented in a 24-bit header
    #[error("BMP image too large for a 24-bit header: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    /// Read failure other than end of input
    #[error("I/O error while reading BMP header: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
