//! # docweave
//!
//! Build Office Open XML packages in memory and write them out: word
//! processing documents (`.docx`) and spreadsheet workbooks (`.xlsx`).
//!
//! ## Features
//!
//! - `docx` (default): [`Document`] and everything under [`docx`]
//! - `xlsx` (default): [`Workbook`] and everything under [`xlsx`]
//!
//! Both models share the packaging layer re-exported as [`opc`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use docweave::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.add_paragraph().add_text("Hello from docweave");
//! doc.save_package("hello.docx")?;
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet("Sheet1")?.add_cell("A1", "Hello")?;
//! workbook.save_package("hello.xlsx")?;
//! # Ok::<(), docweave::Error>(())
//! ```

pub mod prelude;

use std::path::Path;

pub use docweave_core as opc;
pub use docweave_core::{AppProperties, CoreProperties, Theme};

#[cfg(feature = "docx")]
pub use docweave_docx as docx;
#[cfg(feature = "docx")]
pub use docweave_docx::{Document, DocxError, DocxResult, DocxWriter};

#[cfg(feature = "xlsx")]
pub use docweave_xlsx as xlsx;
#[cfg(feature = "xlsx")]
pub use docweave_xlsx::{Workbook, XlsxError, XlsxResult, XlsxWriter};

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised while building or saving a package
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Packaging error
    #[error(transparent)]
    Package(#[from] docweave_core::Error),

    /// Document error
    #[cfg(feature = "docx")]
    #[error(transparent)]
    Docx(#[from] DocxError),

    /// Workbook error
    #[cfg(feature = "xlsx")]
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    /// The file extension does not match the package kind
    #[error("cannot save a {kind} package as '{path}'")]
    Extension { kind: &'static str, path: String },
}

/// Saving for any package root, checking the file extension first
pub trait PackageExt {
    /// File extensions this package may be saved under (lowercase)
    const EXTENSIONS: &'static [&'static str];
    /// Short name used in error messages
    const KIND: &'static str;

    /// Save to `path`, rejecting an extension of the other format
    fn save_package<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    fn check_extension(path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match extension {
            Some(ext) if Self::EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(Error::Extension {
                kind: Self::KIND,
                path: path.display().to_string(),
            }),
        }
    }
}

#[cfg(feature = "docx")]
impl PackageExt for Document {
    const EXTENSIONS: &'static [&'static str] = &["docx"];
    const KIND: &'static str = "docx";

    fn save_package<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        Self::check_extension(path)?;
        DocxWriter::write_file(self, path)?;
        Ok(())
    }
}

#[cfg(feature = "xlsx")]
impl PackageExt for Workbook {
    const EXTENSIONS: &'static [&'static str] = &["xlsx"];
    const KIND: &'static str = "xlsx";

    fn save_package<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        Self::check_extension(path)?;
        XlsxWriter::write_file(self, path)?;
        Ok(())
    }
}
