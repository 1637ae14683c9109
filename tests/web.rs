//! Binding tests, run with `wasm-pack test --node`

#![cfg(target_arch = "wasm32")]

use bmp_header_wasm::bmp::{
    decode_bmp_header_js, describe_bmp_header_js, encode_bmp_header_js, get_bmp_dimensions,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn encode(width: u32, height: u32) -> Vec<u8> {
    encode_bmp_header_js(width, height)
        .map_err(JsValue::from)
        .unwrap()
}

#[wasm_bindgen_test]
fn decodes_canonical_header() {
    let bytes = encode(2, 1);
    assert_eq!(bytes.len(), 54);

    let info = decode_bmp_header_js(&bytes, true).map_err(JsValue::from).unwrap();
    assert_eq!(info.signature(), "BM");
    assert_eq!(info.width(), 2);
    assert_eq!(info.height(), 1);
    assert_eq!(info.bit_count(), 24);
    assert_eq!(info.compression(), 0);
    assert!(!info.top_down());
}

#[wasm_bindgen_test]
fn dimensions_are_unsigned() {
    let mut bytes = encode(3, 4);
    bytes[22..26].copy_from_slice(&(-4i32).to_le_bytes());

    assert_eq!(get_bmp_dimensions(&bytes).map_err(JsValue::from).unwrap(), vec![3, 4]);
}

#[wasm_bindgen_test]
fn describe_returns_pairs() {
    let rows = describe_bmp_header_js(&encode(2, 1)).map_err(JsValue::from).unwrap();
    assert_eq!(rows.length(), 13);

    let first = js_sys::Array::from(&rows.get(0));
    assert_eq!(first.get(0), JsValue::from_str("File Type"));
    assert_eq!(first.get(1), JsValue::from_str("BM"));
}

#[wasm_bindgen_test]
fn errors_cross_the_boundary() {
    assert!(decode_bmp_header_js(&[0u8; 10], false).is_err());

    let mut bytes = encode(1, 1);
    bytes[0] = 0xFF;
    assert!(get_bmp_dimensions(&bytes).is_err());

    // 8 bpp is rejected only in strict mode
    bytes[0] = b'B';
    bytes[28..30].copy_from_slice(&8u16.to_le_bytes());
    assert!(decode_bmp_header_js(&bytes, false).is_ok());
    assert!(decode_bmp_header_js(&bytes, true).is_err());
}

#[wasm_bindgen_test]
fn oversized_encode_is_an_error() {
    assert!(encode_bmp_header_js(u32::MAX, 1).is_err());
    assert!(encode_bmp_header_js(4, 357_913_940).is_err());
}
