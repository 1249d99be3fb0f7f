//! shareqr - PHI-aware URL-to-QR generator for shareable links
//!
//! This library turns a user-supplied URL into a scannable QR code image,
//! guarding against accidental inclusion of protected health information
//! (PHI) in the encoded payload.
//!
//! # Pipeline
//!
//! - **Validation**: a permissive `http(s)://host.tld` format heuristic plus
//!   a case-insensitive substring scan for PHI-indicative tokens
//! - **Encoding**: the validated URL is rendered byte-for-byte into a square
//!   grayscale QR surface
//! - **Filename derivation**: host and path are flattened into a
//!   filesystem-safe stem
//! - **Export**: the surface is written as a lossless PNG
//!
//! Everything is local and synchronous; no data leaves the process except
//! the final file write.
//!
//! # Example
//!
//! ```no_run
//! use shareqr::{QrGenerator, ShareqrConfig};
//!
//! fn main() -> shareqr::Result<()> {
//!     let generator = QrGenerator::new(&ShareqrConfig::default());
//!     let generated = generator.generate("https://unc.edu/health")?;
//!
//!     println!("Wrote {}", generated.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod export;
pub mod filename;
pub mod logging;
pub mod qr;
pub mod session;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{EccLevel, LogRotation, LoggingOptions, OutputOptions, RenderOptions, ShareqrConfig};
pub use export::Exporter;
pub use filename::sanitize;
pub use qr::{QrDecoder, QrEncoder, QrSurface};
pub use session::{QrRequest, SessionState};
pub use validate::{PHI_TOKENS, ValidUrl, validate};

use std::path::PathBuf;

/// High-level interface combining validation, encoding, and export
pub struct QrGenerator {
    encoder: QrEncoder,
    exporter: Exporter,
}

/// Outcome of a full generate-and-export run
#[derive(Debug)]
pub struct GeneratedQr {
    /// The rendered surface, with the exact encoded string
    pub surface: QrSurface,
    /// Sanitized filename stem derived from the URL
    pub stem: String,
    /// Path of the written image file
    pub path: PathBuf,
}

impl QrGenerator {
    /// Create a generator from resolved configuration.
    pub fn new(config: &ShareqrConfig) -> Self {
        let encoder = QrEncoder::with_options(config.render.ecc.to_ec_level(), config.render.size);
        let exporter = Exporter::new(config.output.dir.clone());

        Self { encoder, exporter }
    }

    /// Validate a raw URL and render it into a QR surface without exporting.
    pub fn render(&self, raw_url: &str) -> Result<QrSurface> {
        let valid = validate::validate(raw_url)?;
        self.encoder.encode(&valid)
    }

    /// Run the full pipeline: validate, render, derive a filename, export.
    pub fn generate(&self, raw_url: &str) -> Result<GeneratedQr> {
        let valid = validate::validate(raw_url)?;
        let surface = self.encoder.encode(&valid)?;
        let stem = filename::sanitize(valid.as_str())?;
        let path = self.exporter.export(&surface, &stem)?;

        Ok(GeneratedQr {
            surface,
            stem,
            path,
        })
    }

    /// Export an already rendered surface under the given filename stem.
    pub fn export(&self, surface: &QrSurface, stem: &str) -> Result<PathBuf> {
        self.exporter.export(surface, stem)
    }
}
