//! PNG export of rendered QR surfaces

use crate::error::Result;
use crate::qr::QrSurface;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File extension appended to sanitized filename stems.
pub const EXTENSION: &str = "png";

/// Writes QR surfaces to disk as lossless PNG files
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    /// Create an exporter that writes into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory files are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `surface` to `<dir>/<stem>.png` and return the written path.
    ///
    /// The extension is appended here; `stem` is expected to already be
    /// sanitized. An existing file at the target path is overwritten.
    pub fn export(&self, surface: &QrSurface, stem: &str) -> Result<PathBuf> {
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.dir.join(format!("{stem}.{EXTENSION}"));
        surface
            .image
            .save_with_format(&path, image::ImageFormat::Png)?;

        info!(path = %path.display(), side_px = surface.side(), "Exported QR surface");
        Ok(path)
    }
}
