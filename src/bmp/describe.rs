//! Human-readable field enumeration

use std::fmt;

use super::types::ParsedBitmapHeader;

/// Every header field as a `(label, value)` pair, in display order.
///
/// Rendering is left to the caller.
pub fn describe(header: &ParsedBitmapHeader) -> Vec<(&'static str, String)> {
    let fh = &header.file_header;
    let ih = &header.info_header;

    vec![
        ("File Type", fmt_signature(&fh.signature)),
        ("File Size", fh.file_size.to_string()),
        ("Offset to image information", fh.data_offset.to_string()),
        ("Information Header Size", ih.header_size.to_string()),
        ("Image Width", ih.width.to_string()),
        ("Image Height", ih.height.to_string()),
        ("Number of Bits Per Pixel", ih.bit_count.to_string()),
        ("Image Size", ih.image_size.to_string()),
        ("Compression", ih.compression.to_string()),
        ("Horizontal Resolution", ih.x_pixels_per_meter.to_string()),
        ("Vertical Resolution", ih.y_pixels_per_meter.to_string()),
        ("Number of colours in palette", ih.colors_used.to_string()),
        ("Number of important colours used", ih.colors_important.to_string()),
    ]
}

/// ASCII when printable ("BM"), hex otherwise ("0xFFFE").
pub fn fmt_signature(signature: &[u8; 2]) -> String {
    if signature.iter().all(|b| b.is_ascii_graphic()) {
        signature.iter().map(|&b| b as char).collect()
    } else {
        format!("0x{:02X}{:02X}", signature[0], signature[1])
    }
}

impl fmt::Display for ParsedBitmapHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in describe(self) {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
