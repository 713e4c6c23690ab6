//! Shared value types: alignment, borders, shading, widths and the small
//! closed vocabularies WordprocessingML uses for them

use docweave_core::xml::escape;

/// Horizontal alignment (`w:jc`, `w:lvlJc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
    /// Justified on both edges
    Both,
    Distribute,
}

impl Justification {
    pub fn as_str(self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Center => "center",
            Justification::Right => "right",
            Justification::Both => "both",
            Justification::Distribute => "distribute",
        }
    }
}

/// A border line (`w:top`, `w:insideH`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    /// Line style, e.g. `single`, `double`, `dotted`
    pub style: String,
    /// Width in eighths of a point
    pub size: i32,
    /// RRGGBB or `auto`
    pub color: String,
    /// Distance from text in points
    pub space: i32,
}

impl Border {
    pub fn new<S: Into<String>>(style: S, size: i32, color: S) -> Self {
        Self {
            style: style.into(),
            size,
            color: color.into(),
            space: 0,
        }
    }

    /// Build a border the way table and cell setters do: an empty style
    /// becomes `none` and an empty color becomes black.
    pub fn normalized(style: &str, size: i32, color: &str) -> Self {
        Self::new(
            if style.is_empty() { "none" } else { style },
            size,
            if color.is_empty() { "000000" } else { color },
        )
    }

    /// The default table grid line: single, 1/2 pt, black
    pub fn single() -> Self {
        Self::new("single", 4, "000000")
    }

    pub fn with_space(mut self, space: i32) -> Self {
        self.space = space;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String, tag: &str) {
        out.push_str(&format!(
            "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"{}\" w:color=\"{}\"/>",
            tag,
            escape(&self.style),
            self.size,
            self.space,
            escape(&self.color)
        ));
    }
}

/// Which edge(s) a border setter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPosition {
    Top,
    Left,
    Bottom,
    Right,
    /// Horizontal lines between rows (tables only)
    InsideH,
    /// Vertical lines between columns (tables only)
    InsideV,
    All,
}

/// Background shading (`w:shd`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shading {
    /// Fill color, RRGGBB or `auto`
    pub fill: String,
    /// Pattern color, RRGGBB or `auto`
    pub color: String,
    /// Pattern, e.g. `clear`, `solid`, `pct25`
    pub pattern: String,
}

impl Shading {
    pub fn new<S: Into<String>>(fill: S, color: S, pattern: S) -> Self {
        Self {
            fill: fill.into(),
            color: color.into(),
            pattern: pattern.into(),
        }
    }

    /// Solid background fill with no pattern
    pub fn fill<S: Into<String>>(fill: S) -> Self {
        Self::new(fill.into(), "auto".to_string(), "clear".to_string())
    }

    pub(crate) fn write_xml(&self, out: &mut String) {
        let pattern = if self.pattern.is_empty() {
            "clear"
        } else {
            &self.pattern
        };
        out.push_str(&format!(
            "<w:shd w:val=\"{}\" w:color=\"{}\" w:fill=\"{}\"/>",
            escape(pattern),
            escape(&self.color),
            escape(&self.fill)
        ));
    }
}

/// Table or cell width (`w:tblW`, `w:tcW`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableWidth {
    #[default]
    Auto,
    /// Twips
    Dxa(i32),
    /// Percent of the available width; stored in fiftieths of a percent
    Pct(u32),
}

impl TableWidth {
    /// Value of the `w:w` attribute
    pub fn value(self) -> i64 {
        match self {
            TableWidth::Auto => 0,
            TableWidth::Dxa(w) => w as i64,
            TableWidth::Pct(p) => p as i64 * 50,
        }
    }

    /// Value of the `w:type` attribute
    pub fn type_str(self) -> &'static str {
        match self {
            TableWidth::Auto => "auto",
            TableWidth::Dxa(_) => "dxa",
            TableWidth::Pct(_) => "pct",
        }
    }

    pub(crate) fn write_xml(self, out: &mut String, tag: &str) {
        out.push_str(&format!(
            "<w:{} w:w=\"{}\" w:type=\"{}\"/>",
            tag,
            self.value(),
            self.type_str()
        ));
    }
}

/// Line spacing rule (`w:lineRule`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineRule {
    #[default]
    Auto,
    Exact,
    AtLeast,
}

impl LineRule {
    pub fn as_str(self) -> &'static str {
        match self {
            LineRule::Auto => "auto",
            LineRule::Exact => "exact",
            LineRule::AtLeast => "atLeast",
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Which pages a header or footer applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderFooterType {
    #[default]
    Default,
    First,
    Even,
}

impl HeaderFooterType {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderFooterType::Default => "default",
            HeaderFooterType::First => "first",
            HeaderFooterType::Even => "even",
        }
    }
}

/// Style kind (`w:type` on `w:style`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleType {
    #[default]
    Paragraph,
    Character,
    Table,
    Numbering,
}

impl StyleType {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleType::Paragraph => "paragraph",
            StyleType::Character => "character",
            StyleType::Table => "table",
            StyleType::Numbering => "numbering",
        }
    }
}
