//! PNG export of a rendered canvas.

use std::path::Path;

use crate::pixmap::Pixmap;

/// Error type for canvas export.
#[derive(Debug)]
pub enum ExportError {
    /// Could not create or write the output file
    Io(std::io::Error),
    /// PNG encoder rejected the image
    Encode(png::EncodingError),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Encode(e) => write!(f, "PNG encode error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<png::EncodingError> for ExportError {
    fn from(e: png::EncodingError) -> Self {
        ExportError::Encode(e)
    }
}

impl Pixmap {
    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        Ok(self.as_skia().encode_png()?)
    }

    /// Save the canvas as a PNG file, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}
