//! The workbook root

use std::io::{Seek, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use docweave_core::{AppProperties, CoreProperties, Theme};

use crate::error::{XlsxError, XlsxResult};
use crate::shared_strings::SharedStrings;
use crate::style::Style;
use crate::styles::Styles;
use crate::worksheet::{Worksheet, WorksheetMut};
use crate::writer::XlsxWriter;

/// Longest sheet name consumers accept
pub const MAX_SHEET_NAME_LEN: usize = 31;

const INVALID_SHEET_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A spreadsheet workbook.
///
/// Owns the worksheets, the stylesheet and the shared string table that
/// every sheet's string cells index into.
#[derive(Debug, Clone)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
    shared_strings: SharedStrings,
    pub styles: Styles,
    pub properties: CoreProperties,
    pub app_properties: AppProperties,
    pub theme: Theme,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook {
    /// Empty workbook; add at least one sheet before saving
    pub fn new() -> Self {
        Self {
            worksheets: Vec::new(),
            shared_strings: SharedStrings::new(),
            styles: Styles::new(),
            properties: CoreProperties::new(),
            app_properties: AppProperties::default(),
            theme: Theme::office(),
        }
    }

    // --- Sheets ---

    /// Append a worksheet and return it ready for writing
    pub fn add_worksheet(&mut self, name: &str) -> XlsxResult<WorksheetMut<'_>> {
        self.validate_sheet_name(name)?;
        let sheet_id = self.worksheets.len() as u32 + 1;
        self.worksheets.push(Worksheet::new(name.to_string(), sheet_id));
        log::debug!("added worksheet '{}' (sheetId {})", name, sheet_id);

        let index = self.worksheets.len() - 1;
        Ok(WorksheetMut::new(
            &mut self.worksheets[index],
            &mut self.shared_strings,
        ))
    }

    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    pub fn worksheet_mut(&mut self, index: usize) -> XlsxResult<WorksheetMut<'_>> {
        let count = self.worksheets.len();
        let sheet = self
            .worksheets
            .get_mut(index)
            .ok_or(XlsxError::SheetOutOfBounds(index, count))?;
        Ok(WorksheetMut::new(sheet, &mut self.shared_strings))
    }

    /// Look up a sheet by name, ignoring case
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        let name = name.to_lowercase();
        self.worksheets
            .iter()
            .find(|ws| ws.name().to_lowercase() == name)
    }

    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    fn validate_sheet_name(&self, name: &str) -> XlsxResult<()> {
        if name.is_empty() {
            return Err(XlsxError::InvalidSheetName(
                "sheet name cannot be empty".into(),
            ));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(XlsxError::InvalidSheetName(format!(
                "'{}' is longer than {} characters",
                name, MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
            return Err(XlsxError::InvalidSheetName(format!(
                "'{}' contains '{}'",
                name, c
            )));
        }
        if self.worksheet_by_name(name).is_some() {
            return Err(XlsxError::DuplicateSheetName(name.to_string()));
        }
        Ok(())
    }

    // --- Shared tables ---

    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }

    /// Register a style and return the cellXfs index to give cells
    pub fn create_style(&mut self, style: &Style) -> u32 {
        self.styles.create_style(style)
    }

    /// Register a named style; the returned cellXfs index applies it
    pub fn create_named_style(&mut self, name: &str, style: &Style) -> XlsxResult<u32> {
        self.styles.create_named_style(name, style)
    }

    // --- Properties ---

    pub fn set_title<S: Into<String>>(&mut self, title: S) -> &mut Self {
        self.properties.title = title.into();
        self
    }

    pub fn set_subject<S: Into<String>>(&mut self, subject: S) -> &mut Self {
        self.properties.subject = subject.into();
        self
    }

    /// Set the author; also recorded as the last modifier
    pub fn set_creator<S: Into<String>>(&mut self, creator: S) -> &mut Self {
        let creator = creator.into();
        self.properties.last_modified_by = creator.clone();
        self.properties.creator = creator;
        self
    }

    pub fn set_keywords<S: Into<String>>(&mut self, keywords: S) -> &mut Self {
        self.properties.keywords = keywords.into();
        self
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.properties.description = description.into();
        self
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) -> &mut Self {
        self.properties.created = created;
        self
    }

    pub fn set_modified(&mut self, modified: DateTime<Utc>) -> &mut Self {
        self.properties.modified = modified;
        self
    }

    // --- Output ---

    /// Write the package to `path`, creating or truncating the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()> {
        XlsxWriter::write_file(self, path)
    }

    /// Write the package to any seekable writer
    pub fn write<W: Write + Seek>(&self, writer: W) -> XlsxResult<()> {
        XlsxWriter::write(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sheet_ids_follow_order() {
        let mut wb = Workbook::new();
        wb.add_worksheet("First").unwrap();
        wb.add_worksheet("Second").unwrap();
        assert_eq!(wb.sheet_count(), 2);
        assert_eq!(wb.worksheet(1).map(|s| s.sheet_id()), Some(2));
        assert_eq!(wb.worksheet_by_name("second").map(|s| s.name()), Some("Second"));
        assert!(wb.worksheet(2).is_none());
    }

    #[test]
    fn test_sheet_name_rules() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Data").unwrap();
        assert!(matches!(
            wb.add_worksheet("DATA"),
            Err(XlsxError::DuplicateSheetName(_))
        ));
        assert!(matches!(
            wb.add_worksheet(""),
            Err(XlsxError::InvalidSheetName(_))
        ));
        assert!(matches!(
            wb.add_worksheet("Q1/Q2"),
            Err(XlsxError::InvalidSheetName(_))
        ));
        assert!(matches!(
            wb.add_worksheet(&"x".repeat(32)),
            Err(XlsxError::InvalidSheetName(_))
        ));
        assert!(wb.add_worksheet(&"x".repeat(31)).is_ok());
    }

    #[test]
    fn test_worksheet_mut_shares_strings() {
        let mut wb = Workbook::new();
        wb.add_worksheet("A").unwrap().add_cell("A1", "shared").unwrap();
        wb.add_worksheet("B").unwrap();
        wb.worksheet_mut(1).unwrap().add_cell("C4", "shared").unwrap();

        assert_eq!(wb.shared_strings().unique_count(), 1);
        assert_eq!(wb.shared_strings().count(), 2);
        assert!(matches!(
            wb.worksheet_mut(5),
            Err(XlsxError::SheetOutOfBounds(5, 2))
        ));
    }
}
