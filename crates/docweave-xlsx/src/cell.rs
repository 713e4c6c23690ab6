//! Cell values and storage

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A value assigned to a cell.
///
/// Strings are interned into the workbook's shared string table when they
/// are written to a sheet; dates become serial numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Number(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Number(n as f64)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::DateTime(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CellValue {
    fn from(dt: DateTime<Tz>) -> Self {
        CellValue::DateTime(dt.naive_utc())
    }
}

/// What a cell stores once written to a sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CellData {
    /// No value (a formula without a cached result, or a style-only cell)
    #[default]
    Empty,
    /// Index into the shared string table
    SharedString(u32),
    Number(f64),
    Boolean(bool),
}

/// A worksheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub data: CellData,
    /// Formula text without the leading `=`
    pub formula: Option<String>,
    /// Index into the workbook's cellXfs (0 = default)
    pub style: u32,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared string index, when the cell holds a string
    pub fn shared_string_index(&self) -> Option<u32> {
        match self.data {
            CellData::SharedString(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.data {
            CellData::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.data {
            CellData::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn set_style(&mut self, xf_index: u32) -> &mut Self {
        self.style = xf_index;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String, reference: &str) {
        // NaN and infinities are written as an empty value
        let data = match self.data {
            CellData::Number(n) if !n.is_finite() => CellData::Empty,
            data => data,
        };
        out.push_str(&format!("<c r=\"{}\"", reference));
        if self.style != 0 {
            out.push_str(&format!(" s=\"{}\"", self.style));
        }
        match data {
            CellData::SharedString(_) => out.push_str(" t=\"s\""),
            CellData::Boolean(_) => out.push_str(" t=\"b\""),
            CellData::Number(_) | CellData::Empty => {}
        }

        if self.formula.is_none() && data == CellData::Empty {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(formula) = &self.formula {
            out.push_str(&format!(
                "<f>{}</f>",
                docweave_core::xml::escape(formula)
            ));
        }
        match data {
            CellData::Empty => {}
            CellData::SharedString(i) => out.push_str(&format!("<v>{}</v>", i)),
            CellData::Number(n) => out.push_str(&format!("<v>{}</v>", n)),
            CellData::Boolean(b) => {
                out.push_str(&format!("<v>{}</v>", docweave_core::xml::bool_attr(b)))
            }
        }
        out.push_str("</c>");
    }
}

/// Serial of 1970-01-01 in the 1900 date system
const UNIX_EPOCH_SERIAL: f64 = 25_569.0;
/// Serial of 1900-03-01, the first day after the phantom 1900-02-29
const FIRST_SERIAL_AFTER_LEAP_DAY: f64 = 61.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Serial number of a date/time in the 1900 date system.
///
/// Days since 1899-12-30 with the time of day as the fraction. Dates before
/// 1900-03-01 are one lower, since the 1900 system counts a nonexistent
/// 1900-02-29.
pub fn date_to_serial(dt: NaiveDateTime) -> f64 {
    let millis = dt.and_utc().timestamp_millis() as f64;
    let serial = UNIX_EPOCH_SERIAL + millis / MILLIS_PER_DAY;
    if serial < FIRST_SERIAL_AFTER_LEAP_DAY {
        serial - 1.0
    } else {
        serial
    }
}
