//! Spreadsheet colors

/// Color of a font, fill or border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Application default (`indexed="64"`, the system foreground)
    #[default]
    Auto,
    /// Opaque RGB
    Rgb { r: u8, g: u8, b: u8 },
    /// RGB with alpha
    Argb { a: u8, r: u8, g: u8, b: u8 },
    /// Theme slot (0-11) with a tint in percent (-100..=100)
    Theme { index: u8, tint: i8 },
    /// Legacy palette index
    Indexed(u8),
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Parse `RRGGBB` or `AARRGGBB`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Attributes for a CT_Color element, with a leading space
    pub(crate) fn xml_attrs(&self) -> String {
        match self {
            Color::Auto => " indexed=\"64\"".to_string(),
            Color::Rgb { r, g, b } => format!(" rgb=\"FF{:02X}{:02X}{:02X}\"", r, g, b),
            Color::Argb { a, r, g, b } => {
                format!(" rgb=\"{:02X}{:02X}{:02X}{:02X}\"", a, r, g, b)
            }
            Color::Theme { index, tint: 0 } => format!(" theme=\"{}\"", index),
            Color::Theme { index, tint } => format!(
                " theme=\"{}\" tint=\"{}\"",
                index,
                f64::from(*tint) / 100.0
            ),
            Color::Indexed(i) => format!(" indexed=\"{}\"", i),
        }
    }
}
