//! Number formats

/// Format codes with implicit IDs; these are never written to `numFmts`.
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// First ID handed out to custom format codes
pub const FIRST_CUSTOM_FORMAT_ID: u32 = 164;

/// Display format for cell values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    #[default]
    General,
    /// Built-in format by ID
    BuiltIn(u32),
    /// Format code such as `0.000` or `yyyy-mm-dd`
    Custom(String),
}

impl NumberFormat {
    pub const ID_DATE_SHORT: u32 = 14;
    pub const ID_DATETIME: u32 = 22;
    pub const ID_TEXT: u32 = 49;

    pub fn from_string<S: Into<String>>(code: S) -> Self {
        NumberFormat::Custom(code.into())
    }

    /// `0.00`
    pub fn decimal() -> Self {
        NumberFormat::BuiltIn(2)
    }

    /// `#,##0.00`
    pub fn thousands_decimal() -> Self {
        NumberFormat::BuiltIn(4)
    }

    /// `0%`
    pub fn percent() -> Self {
        NumberFormat::BuiltIn(9)
    }

    pub fn date_short() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE_SHORT)
    }

    pub fn datetime() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATETIME)
    }

    pub fn text() -> Self {
        NumberFormat::BuiltIn(Self::ID_TEXT)
    }

    /// The format code, or "General" for unknown built-in IDs
    pub fn format_code(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => builtin_code(*id).unwrap_or("General"),
            NumberFormat::Custom(code) => code,
        }
    }
}

/// Built-in ID for a format code, if it is one of the implicit formats
pub fn builtin_id(code: &str) -> Option<u32> {
    BUILTIN_FORMATS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(id, _)| *id)
}

/// Format code of a built-in ID
pub fn builtin_code(id: u32) -> Option<&'static str> {
    BUILTIN_FORMATS
        .iter()
        .find(|(i, _)| *i == id)
        .map(|(_, c)| *c)
}
