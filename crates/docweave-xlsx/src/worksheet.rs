//! Worksheets (`xl/worksheets/sheetN.xml`)

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use docweave_core::xml::{escape, NS_R, NS_SPREADSHEET, XML_DECLARATION};

use crate::address::{CellAddress, CellRange, MAX_COLS, MAX_ROWS};
use crate::cell::{date_to_serial, Cell, CellData, CellValue};
use crate::error::{XlsxError, XlsxResult};
use crate::shared_strings::SharedStrings;

/// Width and visibility for a span of columns
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// First column (0-based)
    pub min: u16,
    /// Last column (0-based, inclusive)
    pub max: u16,
    /// Width in characters
    pub width: f64,
    pub hidden: bool,
}

impl Column {
    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }
}

/// Row metadata
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Row {
    /// Height in points (None = default)
    pub height: Option<f64>,
    pub hidden: bool,
}

/// A worksheet: a sparse cell grid plus row, column and merge metadata
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    sheet_id: u32,
    cells: BTreeMap<(u32, u16), Cell>,
    rows: BTreeMap<u32, Row>,
    columns: Vec<Column>,
    merged: Vec<CellRange>,
}

impl Worksheet {
    pub(crate) fn new(name: String, sheet_id: u32) -> Self {
        Self {
            name,
            sheet_id,
            cells: BTreeMap::new(),
            rows: BTreeMap::new(),
            columns: Vec::new(),
            merged: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `sheetId` in the workbook part (1-based)
    pub fn sheet_id(&self) -> u32 {
        self.sheet_id
    }

    pub fn cell(&self, reference: &str) -> XlsxResult<Option<&Cell>> {
        let addr = CellAddress::parse(reference)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        self.cells
            .iter()
            .map(|(&(row, col), cell)| (CellAddress::new(row, col), cell))
    }

    pub fn row(&self, row: u32) -> Option<&Row> {
        self.rows.get(&row)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn merged_ranges(&self) -> &[CellRange] {
        &self.merged
    }

    fn cell_entry(&mut self, addr: CellAddress) -> &mut Cell {
        self.cells.entry((addr.row, addr.col)).or_default()
    }

    /// Set a formula, creating the cell if needed.
    ///
    /// A leading `=` is stripped. A string value already in the cell is
    /// dropped; a number or boolean stays as the cached result.
    pub fn set_cell_formula(&mut self, reference: &str, formula: &str) -> XlsxResult<&mut Cell> {
        let addr = CellAddress::parse(reference)?;
        let cell = self.cell_entry(addr);
        let formula = formula.strip_prefix('=').unwrap_or(formula);
        cell.formula = Some(formula.to_string());
        if let CellData::SharedString(_) = cell.data {
            cell.data = CellData::Empty;
        }
        Ok(cell)
    }

    /// Assign a cellXfs index, creating an empty cell if needed
    pub fn set_cell_style(&mut self, reference: &str, xf_index: u32) -> XlsxResult<&mut Cell> {
        let addr = CellAddress::parse(reference)?;
        let cell = self.cell_entry(addr);
        cell.style = xf_index;
        Ok(cell)
    }

    /// Add a column span (0-based, inclusive) with a width in characters
    pub fn add_column(&mut self, min: u16, max: u16, width: f64) -> XlsxResult<&mut Column> {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if u32::from(max) >= MAX_COLS {
            return Err(XlsxError::ColumnOutOfBounds(u32::from(max) + 1, MAX_COLS));
        }
        self.columns.push(Column {
            min,
            max,
            width,
            hidden: false,
        });
        let last = self.columns.len() - 1;
        Ok(&mut self.columns[last])
    }

    /// Row height in points (row is 0-based)
    pub fn set_row_height(&mut self, row: u32, height: f64) -> XlsxResult<&mut Self> {
        self.row_entry(row)?.height = Some(height);
        Ok(self)
    }

    pub fn set_row_hidden(&mut self, row: u32, hidden: bool) -> XlsxResult<&mut Self> {
        self.row_entry(row)?.hidden = hidden;
        Ok(self)
    }

    fn row_entry(&mut self, row: u32) -> XlsxResult<&mut Row> {
        if row >= MAX_ROWS {
            return Err(XlsxError::RowOutOfBounds(row.saturating_add(1), MAX_ROWS));
        }
        Ok(self.rows.entry(row).or_default())
    }

    /// Merge the rectangle spanned by two references
    pub fn merge_cells(&mut self, top_left: &str, bottom_right: &str) -> XlsxResult<CellRange> {
        let range = CellRange::new(
            CellAddress::parse(top_left)?,
            CellAddress::parse(bottom_right)?,
        );
        if !self.merged.contains(&range) {
            self.merged.push(range);
        }
        Ok(range)
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024 + self.cells.len() * 32);
        xml.push_str(XML_DECLARATION);
        xml.push_str(&format!(
            "\n<worksheet xmlns=\"{}\" xmlns:r=\"{}\">",
            NS_SPREADSHEET, NS_R
        ));

        if !self.columns.is_empty() {
            let mut columns: Vec<&Column> = self.columns.iter().collect();
            columns.sort_by_key(|c| c.min);
            xml.push_str("\n  <cols>");
            for col in columns {
                xml.push_str(&format!(
                    "<col min=\"{}\" max=\"{}\" width=\"{}\" customWidth=\"1\"",
                    col.min as u32 + 1,
                    col.max as u32 + 1,
                    col.width
                ));
                if col.hidden {
                    xml.push_str(" hidden=\"1\"");
                }
                xml.push_str("/>");
            }
            xml.push_str("</cols>");
        }

        xml.push_str("\n  <sheetData>");
        self.write_rows(&mut xml);
        xml.push_str("\n  </sheetData>");

        if !self.merged.is_empty() {
            xml.push_str(&format!("\n  <mergeCells count=\"{}\">", self.merged.len()));
            for range in &self.merged {
                xml.push_str(&format!(
                    "<mergeCell ref=\"{}\"/>",
                    escape(&range.to_a1_string())
                ));
            }
            xml.push_str("</mergeCells>");
        }

        xml.push_str("\n</worksheet>");
        xml
    }

    /// Rows ascending, including rows that carry only metadata
    fn write_rows(&self, xml: &mut String) {
        let mut row_numbers: Vec<u32> = self.rows.keys().copied().collect();
        row_numbers.extend(self.cells.keys().map(|&(row, _)| row));
        row_numbers.sort_unstable();
        row_numbers.dedup();

        for row in row_numbers {
            xml.push_str(&format!("\n    <row r=\"{}\"", row + 1));
            if let Some(meta) = self.rows.get(&row) {
                if let Some(height) = meta.height {
                    xml.push_str(&format!(" ht=\"{}\" customHeight=\"1\"", height));
                }
                if meta.hidden {
                    xml.push_str(" hidden=\"1\"");
                }
            }

            let mut cells = self
                .cells
                .range((row, 0)..=(row, u16::MAX))
                .peekable();
            if cells.peek().is_none() {
                xml.push_str("/>");
                continue;
            }
            xml.push('>');
            for (&(r, c), cell) in cells {
                cell.write_xml(xml, &CellAddress::new(r, c).to_a1_string());
            }
            xml.push_str("</row>");
        }
    }
}

/// Mutable access to a worksheet together with the workbook's shared
/// string table, so string values can be interned as they are written.
#[derive(Debug)]
pub struct WorksheetMut<'a> {
    sheet: &'a mut Worksheet,
    strings: &'a mut SharedStrings,
}

impl<'a> WorksheetMut<'a> {
    pub(crate) fn new(sheet: &'a mut Worksheet, strings: &'a mut SharedStrings) -> Self {
        Self { sheet, strings }
    }

    /// Write a value to a cell; the last write wins.
    ///
    /// Strings are interned right away, so each distinct string keeps its
    /// shared string index even after the cell is overwritten. A formula
    /// already on the cell is kept and the value becomes its cached result.
    pub fn add_cell<V: Into<CellValue>>(
        &mut self,
        reference: &str,
        value: V,
    ) -> XlsxResult<&mut Cell> {
        let addr = CellAddress::parse(reference)?;
        let data = match value.into() {
            CellValue::String(s) => CellData::SharedString(self.strings.add(&s)),
            CellValue::Number(n) if !n.is_finite() => {
                return Err(XlsxError::NonFiniteNumber(addr.to_a1_string()))
            }
            CellValue::Number(n) => CellData::Number(n),
            CellValue::Boolean(b) => CellData::Boolean(b),
            CellValue::DateTime(dt) => CellData::Number(date_to_serial(dt)),
        };
        let cell = self.sheet.cell_entry(addr);
        cell.data = data;
        Ok(cell)
    }

    /// String value of a cell, resolved through the shared string table
    pub fn cell_text(&self, reference: &str) -> XlsxResult<Option<&str>> {
        let index = match self.sheet.cell(reference)? {
            Some(cell) => cell.shared_string_index(),
            None => None,
        };
        index.map(|i| self.strings.get(i)).transpose()
    }
}

impl Deref for WorksheetMut<'_> {
    type Target = Worksheet;

    fn deref(&self) -> &Worksheet {
        self.sheet
    }
}

impl DerefMut for WorksheetMut<'_> {
    fn deref_mut(&mut self) -> &mut Worksheet {
        self.sheet
    }
}
