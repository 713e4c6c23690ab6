//! Shared string table (`xl/sharedStrings.xml`)

use ahash::AHashMap;
use docweave_core::xml::{escape, NS_SPREADSHEET, XML_DECLARATION};

use crate::error::{XlsxError, XlsxResult};

/// Interned string values of every string cell in the workbook.
///
/// An index, once handed out, always refers to the same string. Strings stay
/// in the table even after the cells referencing them are overwritten.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    strings: Vec<String>,
    index: AHashMap<String, u32>,
    /// Total references handed out (the `count` attribute)
    references: u32,
}

impl SharedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `s`, adding it when it is not yet in the table
    pub fn add(&mut self, s: &str) -> u32 {
        self.references += 1;
        if let Some(&i) = self.index.get(s) {
            return i;
        }
        let i = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), i);
        i
    }

    pub fn get(&self, index: u32) -> XlsxResult<&str> {
        self.strings
            .get(index as usize)
            .map(String::as_str)
            .ok_or(XlsxError::SharedStringOutOfRange(index, self.strings.len()))
    }

    /// Index of `s` without adding it
    pub fn find(&self, s: &str) -> Option<u32> {
        self.index.get(s).copied()
    }

    pub fn count(&self) -> u32 {
        self.references
    }

    pub fn unique_count(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.strings.len() * 32);
        xml.push_str(XML_DECLARATION);
        xml.push_str(&format!(
            "\n<sst xmlns=\"{}\" count=\"{}\" uniqueCount=\"{}\">",
            NS_SPREADSHEET,
            self.references,
            self.strings.len()
        ));
        for s in &self.strings {
            if needs_preserve(s) {
                xml.push_str(&format!(
                    "<si><t xml:space=\"preserve\">{}</t></si>",
                    escape(s)
                ));
            } else {
                xml.push_str(&format!("<si><t>{}</t></si>", escape(s)));
            }
        }
        xml.push_str("</sst>");
        xml
    }
}

fn needs_preserve(s: &str) -> bool {
    s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) || s.contains('\n')
}
