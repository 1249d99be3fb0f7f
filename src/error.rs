//! Error types for shareqr operations

use thiserror::Error;

/// Result type alias using shareqr's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shareqr operations
#[derive(Error, Debug)]
pub enum Error {
    /// URL does not match the minimal `scheme://host.tld/...` shape
    #[error("Invalid URL format. Please enter a valid http or https URL.")]
    InvalidFormat,

    /// A blocked PHI token was found in the URL
    #[error("PHI detected in the URL (token '{0}'). Please remove sensitive patient information.")]
    PhiDetected(String),

    /// URL could not be parsed into components for filename derivation
    #[error("Failed to parse URL: {0}")]
    UrlParse(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed during verification
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// Verification decoded a different payload than was encoded
    #[error("QR verification mismatch: encoded '{encoded}' but decoded '{decoded}'")]
    VerifyMismatch {
        /// The string that was encoded into the surface
        encoded: String,
        /// The string read back by the decoder
        decoded: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::UrlParse(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", e))
    }
}
