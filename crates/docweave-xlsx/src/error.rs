//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while building or writing a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Packaging error
    #[error("Package error: {0}")]
    Core(#[from] docweave_core::Error),

    /// Invalid cell reference
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// A named cell style with this name already exists
    #[error("Cell style name already exists: {0}")]
    DuplicateStyleName(String),

    /// NaN or infinity has no cell representation
    #[error("Cell {0} cannot hold a non-finite number")]
    NonFiniteNumber(String),

    /// Shared string index out of range
    #[error("Shared string index {0} out of range (count: {1})")]
    SharedStringOutOfRange(u32, usize),

    /// A package needs at least one worksheet
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,
}
