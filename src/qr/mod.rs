//! QR code encoding and verification
//!
//! This module provides QR surface generation for validated URLs plus a
//! decoder used to verify that a rendered surface scans back to the exact
//! string that was encoded.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;

use image::DynamicImage;

/// A rendered QR code surface
///
/// Pairs the raster image with the exact string that was encoded into it.
/// The encoded string is frozen at render time; editing the input afterwards
/// produces a new surface rather than mutating this one.
#[derive(Debug, Clone)]
pub struct QrSurface {
    /// The rendered raster image (square, grayscale)
    pub image: DynamicImage,
    /// The exact string encoded into the symbol, byte-for-byte
    pub encoded: String,
}

impl QrSurface {
    /// Side length of the square surface in pixels.
    pub fn side(&self) -> u32 {
        self.image.width()
    }

    /// The encoded string.
    pub fn encoded_str(&self) -> &str {
        &self.encoded
    }
}

#[cfg(test)]
mod tests {
    use crate::validate::validate;

    use super::*;

    #[test]
    fn test_surface_is_square() {
        let valid = validate("https://example.org/docs").unwrap();
        let surface = QrEncoder::new().encode(&valid).unwrap();
        assert_eq!(surface.image.width(), surface.image.height());
        assert_eq!(surface.side(), surface.image.width());
    }

    #[test]
    fn test_surface_records_encoded_string() {
        let valid = validate("https://example.org/docs").unwrap();
        let surface = QrEncoder::new().encode(&valid).unwrap();
        assert_eq!(surface.encoded_str(), "https://example.org/docs");
    }
}
