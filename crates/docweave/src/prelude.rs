//! Common imports for docweave users
//!
//! ```rust
//! use docweave::prelude::*;
//! ```

pub use crate::{CoreProperties, Error, PackageExt, Result};

#[cfg(feature = "docx")]
pub use crate::docx::{
    Document, DocxWriter, Drawing, HeaderFooterType, Justification, Orientation, Paragraph,
    Run, Table,
};

#[cfg(feature = "xlsx")]
pub use crate::xlsx::{
    CellAddress, CellRange, CellValue, Color, Style, Workbook, Worksheet, WorksheetMut,
    XlsxWriter,
};
