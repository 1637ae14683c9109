//! BMP header codec in pure Rust

mod decoder;
mod describe;
mod encoder;
mod error;
mod options;
mod types;

pub use decoder::{decode, decode_many, decode_slice, decode_with, parse_header};
pub use describe::{describe, fmt_signature};
pub use encoder::encode_header;
pub use error::{DecodeError, Result};
pub use options::{DecodeOptions, Profile};
pub use types::*;

use wasm_bindgen::prelude::*;

/// Decoded header exposed to JavaScript
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct BmpHeaderInfo {
    inner: ParsedBitmapHeader,
}

#[wasm_bindgen]
impl BmpHeaderInfo {
    /// Signature as text ("BM")
    #[wasm_bindgen(getter)]
    pub fn signature(&self) -> String {
        fmt_signature(&self.inner.file_header.signature)
    }

    #[wasm_bindgen(getter, js_name = fileSize)]
    pub fn file_size(&self) -> u32 {
        self.inner.file_header.file_size
    }

    #[wasm_bindgen(getter, js_name = dataOffset)]
    pub fn data_offset(&self) -> u32 {
        self.inner.file_header.data_offset
    }

    #[wasm_bindgen(getter, js_name = headerSize)]
    pub fn header_size(&self) -> u32 {
        self.inner.info_header.header_size
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 {
        self.inner.info_header.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 {
        self.inner.info_header.height
    }

    #[wasm_bindgen(getter)]
    pub fn planes(&self) -> u16 {
        self.inner.info_header.planes
    }

    #[wasm_bindgen(getter, js_name = bitCount)]
    pub fn bit_count(&self) -> u16 {
        self.inner.info_header.bit_count
    }

    #[wasm_bindgen(getter)]
    pub fn compression(&self) -> u32 {
        self.inner.info_header.compression
    }

    #[wasm_bindgen(getter, js_name = imageSize)]
    pub fn image_size(&self) -> u32 {
        self.inner.info_header.image_size
    }

    #[wasm_bindgen(getter, js_name = xPixelsPerMeter)]
    pub fn x_pixels_per_meter(&self) -> i32 {
        self.inner.info_header.x_pixels_per_meter
    }

    #[wasm_bindgen(getter, js_name = yPixelsPerMeter)]
    pub fn y_pixels_per_meter(&self) -> i32 {
        self.inner.info_header.y_pixels_per_meter
    }

    #[wasm_bindgen(getter, js_name = colorsUsed)]
    pub fn colors_used(&self) -> u32 {
        self.inner.info_header.colors_used
    }

    #[wasm_bindgen(getter, js_name = colorsImportant)]
    pub fn colors_important(&self) -> u32 {
        self.inner.info_header.colors_important
    }

    #[wasm_bindgen(getter, js_name = topDown)]
    pub fn top_down(&self) -> bool {
        self.inner.info_header.is_top_down()
    }
}

impl From<ParsedBitmapHeader> for BmpHeaderInfo {
    fn from(inner: ParsedBitmapHeader) -> Self {
        Self { inner }
    }
}

fn decode_js(data: &[u8], strict: bool) -> std::result::Result<ParsedBitmapHeader, JsError> {
    decode_with(data, &DecodeOptions::from(strict)).map_err(|e| JsError::new(&e.to_string()))
}

/// Decode the 54-byte BMP header
#[wasm_bindgen(js_name = decodeBmpHeader)]
pub fn decode_bmp_header_js(data: &[u8], strict: bool) -> std::result::Result<BmpHeaderInfo, JsError> {
    decode_js(data, strict).map(BmpHeaderInfo::from)
}

/// Header fields as `[label, value]` pairs
#[wasm_bindgen(js_name = describeBmpHeader)]
pub fn describe_bmp_header_js(data: &[u8]) -> std::result::Result<js_sys::Array, JsError> {
    let header = decode_js(data, false)?;

    let rows = js_sys::Array::new();
    for (label, value) in describe(&header) {
        rows.push(&js_sys::Array::of2(
            &JsValue::from_str(label),
            &JsValue::from_str(&value),
        ));
    }
    Ok(rows)
}

/// Get image dimensions from BMP header
#[wasm_bindgen(js_name = getBmpDimensions)]
pub fn get_bmp_dimensions(data: &[u8]) -> std::result::Result<Vec<u32>, JsError> {
    let info = decode_js(data, false)?.info_header;
    Ok(vec![info.abs_width(), info.abs_height()])
}

/// Canonical 24-bit uncompressed header for the given size
#[wasm_bindgen(js_name = encodeBmpHeader)]
pub fn encode_bmp_header_js(width: u32, height: u32) -> std::result::Result<Vec<u8>, JsError> {
    let header =
        ParsedBitmapHeader::rgb24(width, height).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(encode_header(&header).to_vec())
}
