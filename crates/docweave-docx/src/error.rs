//! DOCX error types

use thiserror::Error;

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;

/// Errors that can occur while building or saving a document
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Packaging error
    #[error("Package error: {0}")]
    Core(#[from] docweave_core::Error),

    /// A drawing has no image data to embed
    #[error("Image data not found: {0}")]
    MissingImage(String),
}
