//! bmp-header-wasm: BMP header decoder compiled to WebAssembly
//!
//! Reads the 14-byte file header and 40-byte info header of a bitmap and
//! exposes them as plain values. Pixel data is never touched.
//!
//! ```
//! use bmp_header_wasm::bmp::{decode_slice, encode_header, ParsedBitmapHeader};
//!
//! let bytes = encode_header(&ParsedBitmapHeader::rgb24(2, 1).unwrap());
//! let header = decode_slice(&bytes).unwrap();
//! assert_eq!(header.width(), 2);
//! assert_eq!(header.bit_count(), 24);
//! ```

use wasm_bindgen::prelude::*;

pub mod bmp;
pub mod utils;

pub use bmp::{decode, decode_slice, describe, DecodeError, ParsedBitmapHeader};

/// Get WASM module version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if threading is available
#[wasm_bindgen(js_name = hasThreads)]
pub fn has_threads() -> bool {
    #[cfg(feature = "threads")]
    {
        true
    }
    #[cfg(not(feature = "threads"))]
    {
        false
    }
}
