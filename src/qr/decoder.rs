//! QR code decoder using rqrr, used for verification

use crate::error::{Error, Result};
use image::DynamicImage;

/// QR code decoder
///
/// Reads a rendered surface back into the string it encodes. Used by the
/// `--verify` self-check and the round-trip tests.
pub struct QrDecoder {}

impl QrDecoder {
    /// Create a new QR decoder with default settings
    pub fn new() -> Self {
        Self {}
    }

    /// Decode the first QR code found in an image
    pub fn decode(&self, img: &DynamicImage) -> Result<String> {
        let gray = img.to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare(gray);

        let grids = prepared.detect_grids();
        if grids.is_empty() {
            return Err(Error::NoQrCodeFound);
        }

        match grids[0].decode() {
            Ok((meta, content)) => {
                tracing::debug!(
                    version = ?meta.version,
                    ecc_level = ?meta.ecc_level,
                    length = content.len(),
                    "Decoded QR surface"
                );
                Ok(content)
            }
            Err(e) => Err(Error::QrDecode(format!("Decode failed: {:?}", e))),
        }
    }

    /// Check that a surface decodes to exactly the expected string.
    pub fn verify(&self, img: &DynamicImage, expected: &str) -> Result<()> {
        let decoded = self.decode(img)?;
        if decoded != expected {
            return Err(Error::VerifyMismatch {
                encoded: expected.to_string(),
                decoded,
            });
        }
        Ok(())
    }
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;
    use crate::validate::validate;

    #[test]
    fn test_no_qr_in_blank_image() {
        let blank = DynamicImage::new_luma8(64, 64);
        let result = QrDecoder::new().decode(&blank);
        assert!(matches!(result, Err(Error::NoQrCodeFound)));
    }

    #[test]
    fn test_verify_matches_encoded_string() {
        let valid = validate("https://example.com/ok").unwrap();
        let surface = QrEncoder::new().encode(&valid).unwrap();
        QrDecoder::new()
            .verify(&surface.image, "https://example.com/ok")
            .unwrap();
    }

    #[test]
    fn test_verify_rejects_other_string() {
        let valid = validate("https://example.com/ok").unwrap();
        let surface = QrEncoder::new().encode(&valid).unwrap();
        let result = QrDecoder::new().verify(&surface.image, "https://example.com/other");
        assert!(matches!(result, Err(Error::VerifyMismatch { .. })));
    }
}
