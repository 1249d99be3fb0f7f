//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::QrSurface;
use crate::validate::ValidUrl;
use image::{DynamicImage, Luma};
use qrcode::QrCode;

/// Default side length of a rendered surface in pixels.
pub const DEFAULT_SIZE: u32 = 256;

/// QR code encoder for validated URLs
pub struct QrEncoder {
    /// Error correction level
    ecc_level: qrcode::EcLevel,
    /// Minimum side length in pixels for the rendered surface
    size: u32,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC, 256 px)
    pub fn new() -> Self {
        Self {
            ecc_level: qrcode::EcLevel::M,
            size: DEFAULT_SIZE,
        }
    }

    /// Create a new QR encoder with a specific error correction level and size
    pub fn with_options(ecc_level: qrcode::EcLevel, size: u32) -> Self {
        Self {
            ecc_level,
            size: size.max(1),
        }
    }

    /// Encode a validated URL into a QR surface.
    ///
    /// The URL is encoded byte-for-byte with no transformation. The rendered
    /// side is the smallest multiple of the module grid at or above the
    /// configured size, so a scannable quiet zone and integral module pixels
    /// are preserved.
    pub fn encode(&self, url: &ValidUrl) -> Result<QrSurface> {
        let code = QrCode::with_error_correction_level(url.as_str().as_bytes(), self.ecc_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.size, self.size)
            .build();

        Ok(QrSurface {
            image: DynamicImage::ImageLuma8(image),
            encoded: url.as_str().to_string(),
        })
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn test_encode_valid_url() {
        let valid = validate("https://unc.edu/health").unwrap();
        let surface = QrEncoder::new().encode(&valid).unwrap();
        assert_eq!(surface.encoded_str(), "https://unc.edu/health");
        assert!(surface.side() >= DEFAULT_SIZE);
    }

    #[test]
    fn test_size_is_lower_bound() {
        let valid = validate("https://example.com/x").unwrap();
        let surface = QrEncoder::with_options(qrcode::EcLevel::M, 100)
            .encode(&valid)
            .unwrap();
        assert!(surface.side() >= 100);
    }

    #[test]
    fn test_round_trip() {
        use crate::qr::QrDecoder;

        let original = "https://example.com/a/very/long/link?with=query&and=more";
        let valid = validate(original).unwrap();
        let surface = QrEncoder::new().encode(&valid).unwrap();

        let decoded = QrDecoder::new().decode(&surface.image).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_high_ecc_round_trip() {
        use crate::qr::QrDecoder;

        let valid = validate("https://unc.edu/health").unwrap();
        let surface = QrEncoder::with_options(qrcode::EcLevel::H, 256)
            .encode(&valid)
            .unwrap();

        let decoded = QrDecoder::new().decode(&surface.image).unwrap();
        assert_eq!(decoded, "https://unc.edu/health");
    }
}
