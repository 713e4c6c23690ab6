//! Cell styling types
//!
//! A [`Style`] describes how a cell looks. It is not stored on cells:
//! [`Workbook::create_style`](crate::Workbook::create_style) interns its
//! font, fill, border and number format into the styles part and returns the
//! cellXfs index that [`Cell::set_style`](crate::Cell::set_style) takes.

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, Underline};
pub use number_format::{builtin_code, builtin_id, NumberFormat, FIRST_CUSTOM_FORMAT_ID};

/// Everything one `<xf>` points at.
///
/// Build with the chained setters, starting from the workbook defaults:
///
/// ```
/// use docweave_xlsx::{Color, HorizontalAlignment, Style};
///
/// let total = Style::new()
///     .bold(true)
///     .fill_color(Color::rgb(0xDD, 0xEB, 0xF7))
///     .horizontal_alignment(HorizontalAlignment::Right)
///     .number_format("#,##0.00");
/// assert!(total.font.bold);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub font: FontStyle,
    pub fill: FillStyle,
    pub border: BorderStyle,
    pub alignment: Alignment,
    pub number_format: NumberFormat,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole font record
    pub fn font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    pub fn underline(mut self, underline: Underline) -> Self {
        self.font.underline = underline;
        self
    }

    pub fn font_size(mut self, points: f64) -> Self {
        self.font.size = points;
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = Some(align);
        self
    }

    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = Some(align);
        self
    }

    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }

    /// Format code such as `"0.00%"`; built-in codes resolve to their
    /// reserved id when the style is registered.
    pub fn number_format<S: Into<String>>(mut self, code: S) -> Self {
        self.number_format = NumberFormat::Custom(code.into());
        self
    }

    /// Built-in format by id (e.g. [`NumberFormat::ID_DATE_SHORT`])
    pub fn builtin_format(mut self, id: u32) -> Self {
        self.number_format = NumberFormat::BuiltIn(id);
        self
    }
}
