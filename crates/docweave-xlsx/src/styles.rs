//! The workbook styles part (`xl/styles.xml`)
//!
//! Fonts, fills, borders, number formats and cell formats (Xfs) are each
//! interned by value: adding a record equal to an existing one returns the
//! existing index.

use ahash::AHashMap;
use docweave_core::xml::{escape, NS_SPREADSHEET, XML_DECLARATION};

use crate::error::{XlsxError, XlsxResult};
use crate::style::{
    builtin_id, Alignment, BorderEdge, BorderStyle, Color, FillStyle, FontStyle, NumberFormat,
    PatternType, Style, FIRST_CUSTOM_FORMAT_ID,
};

/// One entry of `cellXfs` (or `cellStyleXfs`): component indices plus
/// inline alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellXf {
    pub num_fmt_id: u32,
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub alignment: Alignment,
    /// Named style this format derives from (index into `cellStyleXfs`)
    pub style_xf_id: u32,
}

/// An entry of `cellStyles`: a name shown in the application's style gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCellStyle {
    pub name: String,
    /// Index into `cellStyleXfs`
    pub xf_id: u32,
    /// Set for the application's predefined styles (0 = Normal)
    pub builtin_id: Option<u32>,
}

/// Index table with value interning
#[derive(Debug, Clone)]
struct Interned<T> {
    items: Vec<T>,
    ids: AHashMap<T, u32>,
}

impl<T: Clone + Eq + std::hash::Hash> Interned<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: AHashMap::new(),
        }
    }

    fn insert(&mut self, item: T) -> u32 {
        if let Some(&id) = self.ids.get(&item) {
            return id;
        }
        let id = self.items.len() as u32;
        self.ids.insert(item.clone(), id);
        self.items.push(item);
        id
    }

    /// Append without making the entry findable by value
    fn push_reserved(&mut self, item: T) {
        self.items.push(item);
    }
}

/// Workbook stylesheet
#[derive(Debug, Clone)]
pub struct Styles {
    fonts: Interned<FontStyle>,
    fills: Interned<FillStyle>,
    borders: Interned<BorderStyle>,
    /// Custom formats only, in ID order
    num_fmts: Vec<(u32, String)>,
    num_fmt_ids: AHashMap<String, u32>,
    cell_style_xfs: Vec<CellXf>,
    cell_styles: Vec<NamedCellStyle>,
    cell_xfs: Interned<CellXf>,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

impl Styles {
    /// Stylesheet with the records every workbook starts with: Calibri 11,
    /// the `none` and `gray125` fills, an empty border, the default Xf and
    /// the built-in "Normal" style.
    pub fn new() -> Self {
        let mut fonts = Interned::new();
        fonts.insert(FontStyle::default());

        let mut fills = Interned::new();
        fills.insert(FillStyle::None);
        // Reserved by consumers; a user fill equal to it still gets its own slot.
        fills.push_reserved(FillStyle::Pattern {
            pattern: PatternType::Gray125,
            foreground: Color::Auto,
            background: Color::Auto,
        });

        let mut borders = Interned::new();
        borders.insert(BorderStyle::default());

        let mut cell_xfs = Interned::new();
        cell_xfs.insert(CellXf::default());

        Self {
            fonts,
            fills,
            borders,
            num_fmts: Vec::new(),
            num_fmt_ids: AHashMap::new(),
            cell_style_xfs: vec![CellXf::default()],
            cell_styles: vec![NamedCellStyle {
                name: "Normal".to_string(),
                xf_id: 0,
                builtin_id: Some(0),
            }],
            cell_xfs,
        }
    }

    pub fn add_font(&mut self, font: FontStyle) -> u32 {
        self.fonts.insert(font)
    }

    pub fn add_fill(&mut self, fill: FillStyle) -> u32 {
        self.fills.insert(fill)
    }

    pub fn add_border(&mut self, border: BorderStyle) -> u32 {
        self.borders.insert(border)
    }

    /// ID for a format code: the built-in ID when the code is one of the
    /// implicit formats, otherwise a custom ID starting at 164.
    pub fn add_number_format(&mut self, code: &str) -> u32 {
        if let Some(id) = builtin_id(code) {
            return id;
        }
        if let Some(&id) = self.num_fmt_ids.get(code) {
            return id;
        }
        let id = FIRST_CUSTOM_FORMAT_ID + self.num_fmts.len() as u32;
        self.num_fmt_ids.insert(code.to_string(), id);
        self.num_fmts.push((id, code.to_string()));
        id
    }

    fn number_format_id(&mut self, format: &NumberFormat) -> u32 {
        match format {
            NumberFormat::General => 0,
            NumberFormat::BuiltIn(id) => *id,
            NumberFormat::Custom(code) => self.add_number_format(code),
        }
    }

    pub fn add_cell_xf(&mut self, xf: CellXf) -> u32 {
        self.cell_xfs.insert(xf)
    }

    fn xf_for(&mut self, style: &Style) -> CellXf {
        CellXf {
            num_fmt_id: self.number_format_id(&style.number_format),
            font_id: self.add_font(style.font.clone()),
            fill_id: self.add_fill(style.fill),
            border_id: self.add_border(style.border),
            alignment: style.alignment,
            style_xf_id: 0,
        }
    }

    /// Intern every component of `style` and return its cellXfs index
    pub fn create_style(&mut self, style: &Style) -> u32 {
        let xf = self.xf_for(style);
        self.add_cell_xf(xf)
    }

    /// Append a master format to `cellStyleXfs` and return its index.
    /// These are not interned: each named style owns its entry.
    pub fn add_cell_style_xf(&mut self, xf: CellXf) -> u32 {
        self.cell_style_xfs.push(CellXf { style_xf_id: 0, ..xf });
        (self.cell_style_xfs.len() - 1) as u32
    }

    /// Register a `cellStyles` entry over an existing `cellStyleXfs` index.
    ///
    /// Names are unique, compared case-insensitively.
    pub fn add_cell_style(
        &mut self,
        name: &str,
        xf_id: u32,
        builtin_id: Option<u32>,
    ) -> XlsxResult<&NamedCellStyle> {
        if self.named_style(name).is_some() {
            return Err(XlsxError::DuplicateStyleName(name.to_string()));
        }
        self.cell_styles.push(NamedCellStyle {
            name: name.to_string(),
            xf_id,
            builtin_id,
        });
        let last = self.cell_styles.len() - 1;
        Ok(&self.cell_styles[last])
    }

    /// Define a named style and return the cellXfs index of a cell format
    /// that applies it.
    pub fn create_named_style(&mut self, name: &str, style: &Style) -> XlsxResult<u32> {
        if self.named_style(name).is_some() {
            return Err(XlsxError::DuplicateStyleName(name.to_string()));
        }
        let xf = self.xf_for(style);
        let xf_id = self.add_cell_style_xf(xf);
        self.add_cell_style(name, xf_id, None)?;
        Ok(self.add_cell_xf(CellXf {
            style_xf_id: xf_id,
            ..xf
        }))
    }

    /// Look up a named style, ignoring case
    pub fn named_style(&self, name: &str) -> Option<&NamedCellStyle> {
        self.cell_styles
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn named_styles(&self) -> &[NamedCellStyle] {
        &self.cell_styles
    }

    pub fn cell_xf(&self, index: u32) -> Option<&CellXf> {
        self.cell_xfs.items.get(index as usize)
    }

    pub fn font(&self, index: u32) -> Option<&FontStyle> {
        self.fonts.items.get(index as usize)
    }

    pub fn font_count(&self) -> usize {
        self.fonts.items.len()
    }

    pub fn fill_count(&self) -> usize {
        self.fills.items.len()
    }

    pub fn border_count(&self) -> usize {
        self.borders.items.len()
    }

    pub fn cell_xf_count(&self) -> usize {
        self.cell_xfs.items.len()
    }

    /// Custom number formats as (ID, code) pairs
    pub fn custom_number_formats(&self) -> &[(u32, String)] {
        &self.num_fmts
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(XML_DECLARATION);
        xml.push_str(&format!("\n<styleSheet xmlns=\"{}\">", NS_SPREADSHEET));

        if !self.num_fmts.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", self.num_fmts.len()));
            for (id, code) in &self.num_fmts {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    escape(code)
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", self.fonts.items.len()));
        for font in &self.fonts.items {
            xml.push_str("\n    ");
            font.write_xml(&mut xml);
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", self.fills.items.len()));
        for fill in &self.fills.items {
            xml.push_str("\n    ");
            write_fill(&mut xml, fill);
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!(
            "\n  <borders count=\"{}\">",
            self.borders.items.len()
        ));
        for border in &self.borders.items {
            xml.push_str("\n    ");
            write_border(&mut xml, border);
        }
        xml.push_str("\n  </borders>");

        xml.push_str(&format!(
            "\n  <cellStyleXfs count=\"{}\">",
            self.cell_style_xfs.len()
        ));
        for xf in &self.cell_style_xfs {
            xml.push_str("\n    ");
            write_xf(&mut xml, xf, false);
        }
        xml.push_str("\n  </cellStyleXfs>");

        xml.push_str(&format!(
            "\n  <cellXfs count=\"{}\">",
            self.cell_xfs.items.len()
        ));
        for xf in &self.cell_xfs.items {
            xml.push_str("\n    ");
            write_xf(&mut xml, xf, true);
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(&format!(
            "\n  <cellStyles count=\"{}\">",
            self.cell_styles.len()
        ));
        for style in &self.cell_styles {
            xml.push_str(&format!(
                "\n    <cellStyle name=\"{}\" xfId=\"{}\"",
                escape(&style.name),
                style.xf_id
            ));
            if let Some(id) = style.builtin_id {
                xml.push_str(&format!(" builtinId=\"{}\"", id));
            }
            xml.push_str("/>");
        }
        xml.push_str("\n  </cellStyles>");

        xml.push_str("\n</styleSheet>");
        xml
    }
}

fn write_color(out: &mut String, tag: &str, color: &Color) {
    out.push_str(&format!("<{}{}/>", tag, color.xml_attrs()));
}

fn write_fill(out: &mut String, fill: &FillStyle) {
    match fill {
        FillStyle::None => out.push_str("<fill><patternFill patternType=\"none\"/></fill>"),
        FillStyle::Solid { color } => {
            out.push_str("<fill><patternFill patternType=\"solid\">");
            write_color(out, "fgColor", color);
            out.push_str("<bgColor indexed=\"64\"/></patternFill></fill>");
        }
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        } => {
            if foreground.is_auto() && background.is_auto() {
                out.push_str(&format!(
                    "<fill><patternFill patternType=\"{}\"/></fill>",
                    pattern.as_str()
                ));
                return;
            }
            out.push_str(&format!(
                "<fill><patternFill patternType=\"{}\">",
                pattern.as_str()
            ));
            write_color(out, "fgColor", foreground);
            write_color(out, "bgColor", background);
            out.push_str("</patternFill></fill>");
        }
    }
}

fn write_border_edge(out: &mut String, tag: &str, edge: &Option<BorderEdge>) {
    match edge.and_then(|e| e.style.as_str().map(|s| (s, e.color))) {
        None => out.push_str(&format!("<{}/>", tag)),
        Some((style, color)) => {
            out.push_str(&format!("<{} style=\"{}\">", tag, style));
            write_color(out, "color", &color);
            out.push_str(&format!("</{}>", tag));
        }
    }
}

fn write_border(out: &mut String, border: &BorderStyle) {
    out.push_str("<border");
    if border.diagonal_up {
        out.push_str(" diagonalUp=\"1\"");
    }
    if border.diagonal_down {
        out.push_str(" diagonalDown=\"1\"");
    }
    out.push('>');
    write_border_edge(out, "left", &border.left);
    write_border_edge(out, "right", &border.right);
    write_border_edge(out, "top", &border.top);
    write_border_edge(out, "bottom", &border.bottom);
    write_border_edge(out, "diagonal", &border.diagonal);
    out.push_str("</border>");
}

/// `xfId` is only written inside `cellXfs`
fn write_xf(out: &mut String, xf: &CellXf, in_cell_xfs: bool) {
    out.push_str(&format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\"",
        xf.num_fmt_id, xf.font_id, xf.fill_id, xf.border_id
    ));
    if in_cell_xfs {
        out.push_str(&format!(" xfId=\"{}\"", xf.style_xf_id));
    }
    for (id, attr) in [
        (xf.num_fmt_id, "applyNumberFormat"),
        (xf.font_id, "applyFont"),
        (xf.fill_id, "applyFill"),
        (xf.border_id, "applyBorder"),
    ] {
        if id != 0 {
            out.push_str(&format!(" {}=\"1\"", attr));
        }
    }
    if xf.alignment.is_default() {
        out.push_str("/>");
        return;
    }
    out.push_str(" applyAlignment=\"1\">");
    xf.alignment.write_xml(out);
    out.push_str("</xf>");
}
