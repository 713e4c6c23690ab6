//! Document settings (`settings.xml`)

use docweave_core::xml::{escape, NS_W, XML_DECLARATION};

/// Layout compatibility options (`w:compat`).
///
/// Flags are written in schema order, followed by the compatibility mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compatibility {
    /// `compatibilityMode` value; 15 is Word 2013 and later
    pub mode: String,
    pub do_not_expand_shift_return: bool,
    pub do_not_use_html_paragraph_auto_spacing: bool,
    pub do_not_break_wrapped_tables: bool,
    pub do_not_snap_to_grid_in_cell: bool,
    pub do_not_wrap_text_with_punct: bool,
    pub do_not_use_east_asian_break_rules: bool,
    pub do_not_use_indent_as_numbering_tab_stop: bool,
    pub allow_space_of_same_style_in_table: bool,
    pub do_not_suppress_indentation: bool,
    pub do_not_autofit_constrained_tables: bool,
    pub split_pg_break_and_para_mark: bool,
    pub do_not_vert_align_cell_with_sp: bool,
    pub do_not_break_constrained_forced_table: bool,
    pub do_not_vert_align_in_txbx: bool,
    pub use_ansi_kerning_pairs: bool,
}

impl Default for Compatibility {
    fn default() -> Self {
        Self {
            mode: "15".to_string(),
            do_not_expand_shift_return: false,
            do_not_use_html_paragraph_auto_spacing: false,
            do_not_break_wrapped_tables: false,
            do_not_snap_to_grid_in_cell: false,
            do_not_wrap_text_with_punct: false,
            do_not_use_east_asian_break_rules: false,
            do_not_use_indent_as_numbering_tab_stop: false,
            allow_space_of_same_style_in_table: false,
            do_not_suppress_indentation: false,
            do_not_autofit_constrained_tables: false,
            split_pg_break_and_para_mark: false,
            do_not_vert_align_cell_with_sp: false,
            do_not_break_constrained_forced_table: false,
            do_not_vert_align_in_txbx: false,
            use_ansi_kerning_pairs: false,
        }
    }
}

impl Compatibility {
    fn flags(&self) -> [(&'static str, bool); 15] {
        [
            ("doNotExpandShiftReturn", self.do_not_expand_shift_return),
            (
                "doNotUseHTMLParagraphAutoSpacing",
                self.do_not_use_html_paragraph_auto_spacing,
            ),
            ("doNotBreakWrappedTables", self.do_not_break_wrapped_tables),
            ("doNotSnapToGridInCell", self.do_not_snap_to_grid_in_cell),
            ("doNotWrapTextWithPunct", self.do_not_wrap_text_with_punct),
            (
                "doNotUseEastAsianBreakRules",
                self.do_not_use_east_asian_break_rules,
            ),
            (
                "doNotUseIndentAsNumberingTabStop",
                self.do_not_use_indent_as_numbering_tab_stop,
            ),
            (
                "allowSpaceOfSameStyleInTable",
                self.allow_space_of_same_style_in_table,
            ),
            ("doNotSuppressIndentation", self.do_not_suppress_indentation),
            (
                "doNotAutofitConstrainedTables",
                self.do_not_autofit_constrained_tables,
            ),
            ("splitPgBreakAndParaMark", self.split_pg_break_and_para_mark),
            ("doNotVertAlignCellWithSp", self.do_not_vert_align_cell_with_sp),
            (
                "doNotBreakConstrainedForcedTable",
                self.do_not_break_constrained_forced_table,
            ),
            ("doNotVertAlignInTxbx", self.do_not_vert_align_in_txbx),
            ("useAnsiKerningPairs", self.use_ansi_kerning_pairs),
        ]
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:compat>");
        for (tag, on) in self.flags() {
            if on {
                out.push_str(&format!("<w:{}/>", tag));
            }
        }
        if !self.mode.is_empty() {
            out.push_str(&format!(
                "<w:compatSetting w:name=\"compatibilityMode\" w:uri=\"http://schemas.microsoft.com/office/document\" w:val=\"{}\"/>",
                escape(&self.mode)
            ));
        }
        out.push_str("</w:compat>");
    }
}

/// The settings part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Ask the consuming application to refresh fields on open
    pub update_fields: bool,
    /// Zoom percent
    pub zoom: u32,
    /// Default tab stop in twips
    pub default_tab_stop: i32,
    /// e.g. `doNotCompress`, `compressPunctuation`
    pub character_spacing_control: String,
    pub compatibility: Compatibility,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            update_fields: true,
            zoom: 100,
            default_tab_stop: 720,
            character_spacing_control: "doNotCompress".to_string(),
            compatibility: Compatibility::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_update_fields(&mut self, update_fields: bool) -> &mut Self {
        self.update_fields = update_fields;
        self
    }

    pub fn set_zoom(&mut self, percent: u32) -> &mut Self {
        self.zoom = percent;
        self
    }

    pub fn set_default_tab_stop(&mut self, twips: i32) -> &mut Self {
        self.default_tab_stop = twips;
        self
    }

    pub fn set_character_spacing_control<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.character_spacing_control = value.into();
        self
    }

    pub fn set_compatibility_mode<S: Into<String>>(&mut self, mode: S) -> &mut Self {
        self.compatibility.mode = mode.into();
        self
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(768);
        out.push_str(XML_DECLARATION);
        out.push_str(&format!("<w:settings xmlns:w=\"{}\">", NS_W));
        out.push_str(&format!("<w:zoom w:percent=\"{}\"/>", self.zoom));
        out.push_str(&format!(
            "<w:defaultTabStop w:val=\"{}\"/>",
            self.default_tab_stop
        ));
        if !self.character_spacing_control.is_empty() {
            out.push_str(&format!(
                "<w:characterSpacingControl w:val=\"{}\"/>",
                escape(&self.character_spacing_control)
            ));
        }
        if self.update_fields {
            out.push_str("<w:updateFields w:val=\"true\"/>");
        }
        self.compatibility.write_xml(&mut out);
        out.push_str("</w:settings>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let xml = Settings::new().to_xml();
        let body = xml
            .split_once("<w:settings ")
            .and_then(|(_, rest)| rest.split_once('>'))
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        assert_eq!(
            body,
            concat!(
                r#"<w:zoom w:percent="100"/>"#,
                r#"<w:defaultTabStop w:val="720"/>"#,
                r#"<w:characterSpacingControl w:val="doNotCompress"/>"#,
                r#"<w:updateFields w:val="true"/>"#,
                "<w:compat>",
                r#"<w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/document" w:val="15"/>"#,
                "</w:compat>",
                "</w:settings>"
            )
        );
    }

    #[test]
    fn test_compat_flags_precede_mode() {
        let mut settings = Settings::new();
        settings.compatibility.use_ansi_kerning_pairs = true;
        settings.compatibility.do_not_expand_shift_return = true;
        settings.set_update_fields(false).set_zoom(150);
        let xml = settings.to_xml();

        let first = xml.find("<w:doNotExpandShiftReturn/>").unwrap();
        let last = xml.find("<w:useAnsiKerningPairs/>").unwrap();
        let mode = xml.find("<w:compatSetting").unwrap();
        assert!(first < last && last < mode);
        assert!(!xml.contains("updateFields"));
        assert!(xml.contains(r#"<w:zoom w:percent="150"/>"#));
    }
}
