//! # docweave-xlsx
//!
//! Spreadsheet (`.xlsx`) object model and writer for docweave.
//!
//! A [`Workbook`] owns its worksheets, a [`Styles`] table and the
//! [`SharedStrings`] table that string cells index into. Cells are written
//! through [`WorksheetMut`], which interns strings as they arrive.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docweave_xlsx::{Color, Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let header = workbook.create_style(&Style::new().bold(true).fill_color(Color::YELLOW));
//!
//! let mut sheet = workbook.add_worksheet("Budget")?;
//! sheet.add_cell("A1", "Item")?.set_style(header);
//! sheet.add_cell("B1", "Cost")?.set_style(header);
//! sheet.add_cell("A2", "Rent")?;
//! sheet.add_cell("B2", 1200)?;
//! sheet.set_cell_formula("B3", "=SUM(B2:B2)")?;
//! sheet.add_column(0, 0, 24.0)?;
//!
//! workbook.save("budget.xlsx")?;
//! # Ok::<(), docweave_xlsx::XlsxError>(())
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod shared_strings;
pub mod style;
pub mod styles;
pub mod workbook;
pub mod worksheet;
pub mod writer;

pub use address::{column_to_letters, letters_to_column, CellAddress, CellRange, MAX_COLS, MAX_ROWS};
pub use cell::{date_to_serial, Cell, CellData, CellValue};
pub use error::{XlsxError, XlsxResult};
pub use shared_strings::SharedStrings;
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, PatternType, Style, Underline, VerticalAlignment,
};
pub use styles::{CellXf, NamedCellStyle, Styles};
pub use workbook::Workbook;
pub use worksheet::{Column, Row, Worksheet, WorksheetMut};
pub use writer::XlsxWriter;
