//! Inline `<alignment>` of a cell format

/// Alignment written inside an `<xf>`. Unset fields are left to the
/// application default (general horizontal, bottom vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    pub indent: u8,
    /// `textRotation`: 0-180, or 255 for vertical stacked text
    pub rotation: u8,
}

impl Alignment {
    /// True when nothing would be written
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn write_xml(&self, out: &mut String) {
        out.push_str("<alignment");
        if let Some(h) = self.horizontal {
            out.push_str(&format!(" horizontal=\"{}\"", h.as_str()));
        }
        if let Some(v) = self.vertical {
            out.push_str(&format!(" vertical=\"{}\"", v.as_str()));
        }
        if self.rotation != 0 {
            out.push_str(&format!(" textRotation=\"{}\"", self.rotation));
        }
        if self.wrap_text {
            out.push_str(" wrapText=\"1\"");
        }
        if self.indent != 0 {
            out.push_str(&format!(" indent=\"{}\"", self.indent));
        }
        if self.shrink_to_fit {
            out.push_str(" shrinkToFit=\"1\"");
        }
        out.push_str("/>");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

impl HorizontalAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Fill => "fill",
            Self::Justify => "justify",
            Self::CenterContinuous => "centerContinuous",
            Self::Distributed => "distributed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Justify,
    Distributed,
}

impl VerticalAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Justify => "justify",
            Self::Distributed => "distributed",
        }
    }
}
