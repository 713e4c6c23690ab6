//! Runs: the smallest unit of formatted content (`w:r`)

use docweave_core::xml::escape;

use crate::drawing::Drawing;
use crate::render::RenderContext;
use crate::types::Shading;

/// Break kind for a run holding a break (`w:br`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakType {
    Page,
    Column,
    /// Line break inside a paragraph
    TextWrapping,
}

/// One step of a complex field.
///
/// A field is spread across sibling runs: begin, instruction, separate, the
/// cached result as ordinary text, then end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Begin,
    /// Field code, e.g. `PAGE` or `NUMPAGES`
    Instruction(String),
    Separate,
    End,
}

/// What a run carries. Exactly one kind at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Text; tab characters render as `w:tab`
    Text(String),
    Break(BreakType),
    Drawing(Drawing),
    Field(Field),
}

impl Default for RunContent {
    fn default() -> Self {
        RunContent::Text(String::new())
    }
}

/// Vertical text position (`w:vertAlign`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalTextAlign {
    Baseline,
    Superscript,
    Subscript,
}

impl VerticalTextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            VerticalTextAlign::Baseline => "baseline",
            VerticalTextAlign::Superscript => "superscript",
            VerticalTextAlign::Subscript => "subscript",
        }
    }
}

/// Character formatting (`w:rPr`).
///
/// `Default` is empty so styles can carry just the properties they set.
/// Empty strings and zero sizes mean "not set".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunProperties {
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub caps: bool,
    pub small_caps: bool,
    pub strike: bool,
    pub double_strike: bool,
    /// RRGGBB or `auto`
    pub color: String,
    /// Character spacing in twips; zero is unset
    pub character_spacing: i32,
    /// Size in half-points; zero is unset
    pub font_size: i32,
    /// Highlight color name, e.g. `yellow`
    pub highlight: String,
    /// Underline style, e.g. `single`, `double`, `dotted`
    pub underline: String,
    pub shading: Option<Shading>,
    pub vertical_align: Option<VerticalTextAlign>,
    pub rtl: bool,
    /// Language tag, e.g. `en-US`
    pub language: String,
}

impl RunProperties {
    /// Check whether any property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serialize as `<w:rPr>`; nothing when empty
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    pub(crate) fn write_xml(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        out.push_str("<w:rPr>");

        if !self.font_family.is_empty() {
            let font = escape(&self.font_family);
            out.push_str(&format!(
                "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:eastAsia=\"{0}\" w:cs=\"{0}\"/>",
                font
            ));
        }
        if self.bold {
            out.push_str("<w:b/><w:bCs/>");
        }
        if self.italic {
            out.push_str("<w:i/><w:iCs/>");
        }
        if self.caps {
            out.push_str("<w:caps/>");
        }
        if self.small_caps {
            out.push_str("<w:smallCaps/>");
        }
        if self.strike {
            out.push_str("<w:strike/>");
        }
        if self.double_strike {
            out.push_str("<w:dstrike/>");
        }
        if !self.color.is_empty() {
            out.push_str(&format!("<w:color w:val=\"{}\"/>", escape(&self.color)));
        }
        if self.character_spacing != 0 {
            out.push_str(&format!("<w:spacing w:val=\"{}\"/>", self.character_spacing));
        }
        if self.font_size != 0 {
            out.push_str(&format!(
                "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>",
                self.font_size
            ));
        }
        if !self.highlight.is_empty() {
            out.push_str(&format!("<w:highlight w:val=\"{}\"/>", escape(&self.highlight)));
        }
        if !self.underline.is_empty() {
            out.push_str(&format!("<w:u w:val=\"{}\"/>", escape(&self.underline)));
        }
        if let Some(shading) = &self.shading {
            shading.write_xml(out);
        }
        if let Some(align) = self.vertical_align {
            out.push_str(&format!("<w:vertAlign w:val=\"{}\"/>", align.as_str()));
        }
        if self.rtl {
            out.push_str("<w:rtl/>");
        }
        if !self.language.is_empty() {
            out.push_str(&format!("<w:lang w:val=\"{}\"/>", escape(&self.language)));
        }

        out.push_str("</w:rPr>");
    }
}

/// A run of content sharing one set of character properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub content: RunContent,
    pub properties: RunProperties,
}

impl Default for Run {
    fn default() -> Self {
        Self::new()
    }
}

impl Run {
    /// An empty text run in 11pt black Calibri
    pub fn new() -> Self {
        Self {
            content: RunContent::default(),
            properties: RunProperties {
                font_family: "Calibri".to_string(),
                color: "000000".to_string(),
                font_size: 22,
                ..RunProperties::default()
            },
        }
    }

    /// A run with the same properties and different text
    pub fn with_text(&self, text: &str) -> Self {
        Self {
            content: RunContent::Text(text.to_string()),
            properties: self.properties.clone(),
        }
    }

    /// The run's text, if it holds text
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The run's drawing, if it holds one
    pub fn drawing(&self) -> Option<&Drawing> {
        match &self.content {
            RunContent::Drawing(drawing) => Some(drawing),
            _ => None,
        }
    }

    /// Replace the content with text
    pub fn add_text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.content = RunContent::Text(text.into());
        self
    }

    /// Append a tab to the text (replacing non-text content)
    pub fn add_tab(&mut self) -> &mut Self {
        match &mut self.content {
            RunContent::Text(text) => text.push('\t'),
            other => *other = RunContent::Text("\t".to_string()),
        }
        self
    }

    pub fn add_break(&mut self, break_type: BreakType) -> &mut Self {
        self.content = RunContent::Break(break_type);
        self
    }

    pub fn add_drawing(&mut self, drawing: Drawing) -> &mut Self {
        self.content = RunContent::Drawing(drawing);
        self
    }

    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.content = RunContent::Field(field);
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.properties.italic = italic;
        self
    }

    /// Underline style; empty removes the underline
    pub fn set_underline<S: Into<String>>(&mut self, underline: S) -> &mut Self {
        self.properties.underline = underline.into();
        self
    }

    pub fn set_strike(&mut self, strike: bool) -> &mut Self {
        self.properties.strike = strike;
        self
    }

    pub fn set_double_strike(&mut self, double_strike: bool) -> &mut Self {
        self.properties.double_strike = double_strike;
        self
    }

    pub fn set_superscript(&mut self, superscript: bool) -> &mut Self {
        self.set_script(VerticalTextAlign::Superscript, superscript)
    }

    pub fn set_subscript(&mut self, subscript: bool) -> &mut Self {
        self.set_script(VerticalTextAlign::Subscript, subscript)
    }

    fn set_script(&mut self, align: VerticalTextAlign, on: bool) -> &mut Self {
        if on {
            self.properties.vertical_align = Some(align);
        } else if self.properties.vertical_align == Some(align) {
            self.properties.vertical_align = None;
        }
        self
    }

    pub fn set_vertical_align(&mut self, align: VerticalTextAlign) -> &mut Self {
        self.properties.vertical_align = Some(align);
        self
    }

    /// Size in half-points (22 = 11pt)
    pub fn set_font_size(&mut self, half_points: i32) -> &mut Self {
        self.properties.font_size = half_points;
        self
    }

    pub fn set_font_family<S: Into<String>>(&mut self, font: S) -> &mut Self {
        self.properties.font_family = font.into();
        self
    }

    pub fn set_color<S: Into<String>>(&mut self, color: S) -> &mut Self {
        self.properties.color = color.into();
        self
    }

    pub fn set_highlight<S: Into<String>>(&mut self, highlight: S) -> &mut Self {
        self.properties.highlight = highlight.into();
        self
    }

    pub fn set_caps(&mut self, caps: bool) -> &mut Self {
        self.properties.caps = caps;
        self
    }

    pub fn set_small_caps(&mut self, small_caps: bool) -> &mut Self {
        self.properties.small_caps = small_caps;
        self
    }

    /// Character spacing in twips
    pub fn set_character_spacing(&mut self, spacing: i32) -> &mut Self {
        self.properties.character_spacing = spacing;
        self
    }

    pub fn set_shading(&mut self, fill: &str, color: &str, pattern: &str) -> &mut Self {
        self.properties.shading = Some(Shading::new(fill, color, pattern));
        self
    }

    pub fn set_rtl(&mut self, rtl: bool) -> &mut Self {
        self.properties.rtl = rtl;
        self
    }

    pub fn set_language<S: Into<String>>(&mut self, language: S) -> &mut Self {
        self.properties.language = language.into();
        self
    }

    /// Serialize with placeholder relationship IDs
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out, &mut RenderContext::detached());
        out
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        out.push_str("<w:r>");
        self.properties.write_xml(out);

        match &self.content {
            RunContent::Text(text) => write_text(out, text),
            RunContent::Break(BreakType::Page) => out.push_str("<w:br w:type=\"page\"/>"),
            RunContent::Break(BreakType::Column) => out.push_str("<w:br w:type=\"column\"/>"),
            RunContent::Break(BreakType::TextWrapping) => out.push_str("<w:br/>"),
            RunContent::Drawing(drawing) => drawing.write_xml(out, ctx),
            RunContent::Field(Field::Begin) => {
                out.push_str("<w:fldChar w:fldCharType=\"begin\"/>")
            }
            RunContent::Field(Field::Instruction(code)) => out.push_str(&format!(
                "<w:instrText xml:space=\"preserve\">{}</w:instrText>",
                escape(code)
            )),
            RunContent::Field(Field::Separate) => {
                out.push_str("<w:fldChar w:fldCharType=\"separate\"/>")
            }
            RunContent::Field(Field::End) => out.push_str("<w:fldChar w:fldCharType=\"end\"/>"),
        }

        out.push_str("</w:r>");
    }
}

fn write_text(out: &mut String, text: &str) {
    for (i, segment) in text.split('\t').enumerate() {
        if i > 0 {
            out.push_str("<w:tab/>");
        }
        if !segment.is_empty() {
            out.push_str(&format!(
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape(segment)
            ));
        }
    }
}
