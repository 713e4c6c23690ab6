//! Cell references in A1 notation

use std::fmt;
use std::str::FromStr;

use crate::error::{XlsxError, XlsxResult};

/// Number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;
/// Number of columns in a worksheet (A..XFD)
pub const MAX_COLS: u32 = 16_384;

/// A cell address (e.g. "B7")
///
/// Row and column are 0-based; the A1 form is 1-based. A `$` marker in the
/// input is accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based, A=0)
    pub col: u16,
}

impl CellAddress {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference
    ///
    /// # Examples
    /// ```
    /// use docweave_xlsx::CellAddress;
    ///
    /// let addr = CellAddress::parse("C10").unwrap();
    /// assert_eq!((addr.row, addr.col), (9, 2));
    /// ```
    pub fn parse(s: &str) -> XlsxResult<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }
        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(XlsxError::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        let col = letters_to_column(&s[col_start..pos])?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }
        let digits = &s[pos..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(XlsxError::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }
        let row: u32 = digits
            .parse()
            .map_err(|_| XlsxError::RowOutOfBounds(u32::MAX, MAX_ROWS))?;
        if row == 0 {
            return Err(XlsxError::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        if row > MAX_ROWS {
            return Err(XlsxError::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = XlsxError;

    fn from_str(s: &str) -> XlsxResult<Self> {
        Self::parse(s)
    }
}

/// Convert a 0-based column index to letters (0 = A, 26 = AA)
pub fn column_to_letters(col: u16) -> String {
    let mut letters = Vec::new();
    let mut n = col as u32 + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Convert column letters to a 0-based index (case-insensitive)
pub fn letters_to_column(letters: &str) -> XlsxResult<u16> {
    if letters.is_empty() {
        return Err(XlsxError::InvalidAddress("empty column letters".into()));
    }
    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(XlsxError::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > MAX_COLS {
            return Err(XlsxError::ColumnOutOfBounds(col, MAX_COLS));
        }
    }
    Ok((col - 1) as u16)
}

/// A rectangular range (e.g. "A1:B2"), normalized so `start` is top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Parse "A1:B2" or a single reference
    pub fn parse(s: &str) -> XlsxResult<Self> {
        match s.trim().split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    pub fn contains(&self, addr: &CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Always "TL:BR", even for a single cell
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = XlsxError;

    fn from_str(s: &str) -> XlsxResult<Self> {
        Self::parse(s)
    }
}
