//! Cell borders

use super::Color;

/// A border in the workbook's border table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
    pub diagonal: Option<BorderEdge>,
    pub diagonal_up: bool,
    pub diagonal_down: bool,
}

impl BorderStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same line on all four sides
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
            ..Self::default()
        }
    }

    pub fn with_left(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.left = Some(BorderEdge::new(style, color));
        self
    }

    pub fn with_right(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.right = Some(BorderEdge::new(style, color));
        self
    }

    pub fn with_top(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.top = Some(BorderEdge::new(style, color));
        self
    }

    pub fn with_bottom(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.bottom = Some(BorderEdge::new(style, color));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.top.is_none()
            && self.bottom.is_none()
            && self.diagonal.is_none()
    }
}

/// One side of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    pub style: BorderLineStyle,
    pub color: Color,
}

impl BorderEdge {
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Thin black line
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderLineStyle {
    /// `style` attribute value, `None` when no line is drawn
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            BorderLineStyle::None => None,
            BorderLineStyle::Thin => Some("thin"),
            BorderLineStyle::Medium => Some("medium"),
            BorderLineStyle::Thick => Some("thick"),
            BorderLineStyle::Dashed => Some("dashed"),
            BorderLineStyle::Dotted => Some("dotted"),
            BorderLineStyle::Double => Some("double"),
            BorderLineStyle::Hair => Some("hair"),
            BorderLineStyle::MediumDashed => Some("mediumDashed"),
            BorderLineStyle::DashDot => Some("dashDot"),
            BorderLineStyle::MediumDashDot => Some("mediumDashDot"),
            BorderLineStyle::DashDotDot => Some("dashDotDot"),
            BorderLineStyle::MediumDashDotDot => Some("mediumDashDotDot"),
            BorderLineStyle::SlantDashDot => Some("slantDashDot"),
        }
    }
}
