//! `<font>` records of the styles part

use std::hash::{Hash, Hasher};

use docweave_core::xml::escape;

use super::Color;

/// One entry of the `fonts` table. The workbook default is Calibri 11.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    pub name: String,
    /// Points; written as `sz`
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: Underline,
    /// `Color::Auto` writes no `color` element
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            strikethrough: false,
            underline: Underline::None,
            color: Color::Auto,
        }
    }
}

// Fonts key the interning map; f64 has no Eq, so the size hashes by bits.
impl Hash for FontStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        (self.bold, self.italic, self.strikethrough).hash(state);
        self.underline.hash(state);
        self.color.hash(state);
    }
}

impl Eq for FontStyle {}

impl FontStyle {
    /// Children in CT_Font order: b, i, strike, u, sz, color, name, family.
    pub(crate) fn write_xml(&self, out: &mut String) {
        out.push_str("<font>");
        for (on, tag) in [
            (self.bold, "<b/>"),
            (self.italic, "<i/>"),
            (self.strikethrough, "<strike/>"),
        ] {
            if on {
                out.push_str(tag);
            }
        }
        self.underline.write_xml(out);
        out.push_str(&format!("<sz val=\"{}\"/>", self.size));
        if !self.color.is_auto() {
            out.push_str(&format!("<color{}/>", self.color.xml_attrs()));
        }
        out.push_str(&format!("<name val=\"{}\"/>", escape(&self.name)));
        // 2 = swiss (sans-serif)
        out.push_str("<family val=\"2\"/>");
        out.push_str("</font>");
    }
}

/// Underline kinds SpreadsheetML accepts on `<u val>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    fn write_xml(self, out: &mut String) {
        let val = match self {
            Underline::None => return,
            // single is the schema default and needs no attribute
            Underline::Single => return out.push_str("<u/>"),
            Underline::Double => "double",
            Underline::SingleAccounting => "singleAccounting",
            Underline::DoubleAccounting => "doubleAccounting",
        };
        out.push_str(&format!("<u val=\"{}\"/>", val));
    }
}
