//! BMP header records

use super::error::{DecodeError, Result};

/// "BM" - the only signature this decoder accepts
pub const BMP_SIGNATURE: [u8; 2] = [0x42, 0x4D];

/// BITMAPFILEHEADER size
pub const FILE_HEADER_LEN: usize = 14;

/// BITMAPINFOHEADER size (classic variant)
pub const INFO_HEADER_LEN: usize = 40;

/// Both records back to back
pub const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// BI_RGB
pub const COMPRESSION_NONE: u32 = 0;

/// The only bit depth with guaranteed support
pub const SUPPORTED_BIT_COUNT: u16 = 24;

/// ~72 DPI
pub const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// The 14-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Total size of the file in bytes, as recorded by the writer.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset from the start of the file to the pixel array.
    pub data_offset: u32,
}

/// The 40-byte info header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive = bottom-up rows, negative = top-down rows.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    /// Zero means "unspecified", which is legal for BI_RGB images.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    pub fn abs_width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub fn abs_height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Bytes per pixel row, padded to a 4-byte boundary.
    pub fn row_stride(&self) -> u64 {
        ((self.bit_count as u64 * self.abs_width() as u64 + 31) / 32) * 4
    }

    /// Size of the pixel array, falling back to the computed size when the
    /// header leaves it unspecified.
    ///
    /// `None` when the computed size does not fit in a `u64`.
    pub fn pixel_data_len(&self) -> Option<u64> {
        if self.image_size != 0 {
            Some(self.image_size as u64)
        } else {
            self.row_stride().checked_mul(self.abs_height() as u64)
        }
    }

    /// Uncompressed 24 bits per pixel.
    pub fn is_rgb24(&self) -> bool {
        self.bit_count == SUPPORTED_BIT_COUNT && self.compression == COMPRESSION_NONE
    }
}

/// A fully decoded and validated file + info header pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedBitmapHeader {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
}

impl ParsedBitmapHeader {
    /// Canonical header of an uncompressed, bottom-up 24-bit bitmap.
    ///
    /// Fails when a dimension does not fit the signed header fields or the
    /// resulting file size does not fit in 32 bits.
    pub fn rgb24(width: u32, height: u32) -> Result<Self> {
        let too_large = || DecodeError::ImageTooLarge { width, height };
        let signed_width = i32::try_from(width).map_err(|_| too_large())?;
        let signed_height = i32::try_from(height).map_err(|_| too_large())?;

        let mut info_header = InfoHeader {
            header_size: INFO_HEADER_LEN as u32,
            width: signed_width,
            height: signed_height,
            planes: 1,
            bit_count: SUPPORTED_BIT_COUNT,
            compression: COMPRESSION_NONE,
            image_size: 0,
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            colors_used: 0,
            colors_important: 0,
        };
        let image_size = info_header
            .pixel_data_len()
            .and_then(|len| u32::try_from(len).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(HEADER_LEN as u32)
            .ok_or_else(too_large)?;
        info_header.image_size = image_size;

        Ok(Self {
            file_header: FileHeader {
                signature: BMP_SIGNATURE,
                file_size,
                reserved1: 0,
                reserved2: 0,
                data_offset: HEADER_LEN as u32,
            },
            info_header,
        })
    }

    pub fn width(&self) -> i32 {
        self.info_header.width
    }

    pub fn height(&self) -> i32 {
        self.info_header.height
    }

    pub fn bit_count(&self) -> u16 {
        self.info_header.bit_count
    }

    pub fn compression(&self) -> u32 {
        self.info_header.compression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_stride_padding() {
        // 2 px * 3 bytes = 6, padded to 8
        let h = ParsedBitmapHeader::rgb24(2, 1).unwrap();
        assert_eq!(h.info_header.row_stride(), 8);

        let h = ParsedBitmapHeader::rgb24(4, 1).unwrap();
        assert_eq!(h.info_header.row_stride(), 12);
    }

    #[test]
    fn test_rgb24_sizes() {
        let h = ParsedBitmapHeader::rgb24(3, 2).unwrap();
        assert_eq!(h.info_header.image_size, 24);
        assert_eq!(h.file_header.file_size, 54 + 24);
        assert_eq!(h.file_header.data_offset, 54);
        assert!(h.info_header.is_rgb24());
        assert!(!h.info_header.is_top_down());
    }

    #[test]
    fn test_pixel_data_len_when_unspecified() {
        let mut info = ParsedBitmapHeader::rgb24(5, 3).unwrap().info_header;
        info.image_size = 0;
        info.height = -3;
        assert!(info.is_top_down());
        assert_eq!(info.abs_height(), 3);
        assert_eq!(info.pixel_data_len(), Some(16 * 3));
    }

    #[test]
    fn test_pixel_data_len_extreme_dimensions() {
        let mut info = ParsedBitmapHeader::rgb24(1, 1).unwrap().info_header;
        info.bit_count = u16::MAX;
        info.width = i32::MIN;
        info.height = i32::MIN;
        info.image_size = 0;

        assert_eq!(info.row_stride(), ((u16::MAX as u64 * (1u64 << 31) + 31) / 32) * 4);
        assert_eq!(info.pixel_data_len(), None);

        info.image_size = 12;
        assert_eq!(info.pixel_data_len(), Some(12));
    }

    #[test]
    fn test_rgb24_rejects_wrapping_dimensions() {
        assert!(matches!(
            ParsedBitmapHeader::rgb24(u32::MAX, 1),
            Err(DecodeError::ImageTooLarge { width: u32::MAX, height: 1 })
        ));
        assert!(matches!(
            ParsedBitmapHeader::rgb24(1, i32::MAX as u32 + 1),
            Err(DecodeError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn test_rgb24_rejects_oversized_file() {
        // 4 px rows are 12 bytes; 12 * 357_913_940 + 54 exceeds u32::MAX
        assert!(matches!(
            ParsedBitmapHeader::rgb24(4, 357_913_940),
            Err(DecodeError::ImageTooLarge { width: 4, height: 357_913_940 })
        ));

        // Largest height whose file size still fits
        let max_height = (u32::MAX - 54) / 12;
        let h = ParsedBitmapHeader::rgb24(4, max_height).unwrap();
        assert_eq!(h.file_header.file_size, 54 + 12 * max_height);
        assert!(!h.info_header.is_top_down());
    }
}
