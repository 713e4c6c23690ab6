//! Paragraphs (`w:p`) and their properties

use std::path::Path;

use docweave_core::xml::escape;

use crate::drawing::Drawing;
use crate::error::DocxResult;
use crate::render::RenderContext;
use crate::run::{BreakType, Field, Run};
use crate::section::SectionProperties;
use crate::types::{Border, BorderPosition, Justification, LineRule, Shading};

/// List membership (`w:numPr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    /// Concrete numbering instance (`w:numId`)
    pub num_id: u32,
    /// Zero-based list level (`w:ilvl`)
    pub level: u32,
}

/// Paragraph borders (`w:pBdr`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphBorders {
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
}

impl ParagraphBorders {
    fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.bottom.is_none() && self.right.is_none()
    }
}

/// Paragraph formatting (`w:pPr`).
///
/// `Default` is empty; [`Paragraph::new`] applies the usual body defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphProperties {
    /// Paragraph style ID
    pub style: String,
    pub keep_next: bool,
    pub keep_lines: bool,
    pub page_break_before: bool,
    pub widow_control: bool,
    pub numbering: Option<NumberingRef>,
    pub borders: ParagraphBorders,
    pub shading: Option<Shading>,
    /// Space before, in twips
    pub spacing_before: Option<i32>,
    /// Space after, in twips
    pub spacing_after: Option<i32>,
    /// Line spacing; 240ths of a line for `Auto`, twips otherwise
    pub spacing_line: Option<i32>,
    pub line_rule: LineRule,
    pub indent_left: Option<i32>,
    pub indent_right: Option<i32>,
    pub indent_first_line: Option<i32>,
    pub indent_hanging: Option<i32>,
    pub justification: Option<Justification>,
    /// Closes a section at this paragraph
    pub section: Option<Box<SectionProperties>>,
}

impl ParagraphProperties {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        if self.is_empty() {
            return;
        }
        out.push_str("<w:pPr>");

        if !self.style.is_empty() {
            out.push_str(&format!("<w:pStyle w:val=\"{}\"/>", escape(&self.style)));
        }
        if self.keep_next {
            out.push_str("<w:keepNext/>");
        }
        if self.keep_lines {
            out.push_str("<w:keepLines/>");
        }
        if self.page_break_before {
            out.push_str("<w:pageBreakBefore/>");
        }
        if self.widow_control {
            out.push_str("<w:widowControl/>");
        }
        if let Some(numbering) = self.numbering {
            out.push_str(&format!(
                "<w:numPr><w:ilvl w:val=\"{}\"/><w:numId w:val=\"{}\"/></w:numPr>",
                numbering.level, numbering.num_id
            ));
        }
        if !self.borders.is_empty() {
            out.push_str("<w:pBdr>");
            let edges = [
                ("top", &self.borders.top),
                ("left", &self.borders.left),
                ("bottom", &self.borders.bottom),
                ("right", &self.borders.right),
            ];
            for (tag, border) in edges {
                if let Some(border) = border {
                    border.write_xml(out, tag);
                }
            }
            out.push_str("</w:pBdr>");
        }
        if let Some(shading) = &self.shading {
            shading.write_xml(out);
        }
        self.write_spacing(out);
        self.write_indent(out);
        if let Some(jc) = self.justification {
            out.push_str(&format!("<w:jc w:val=\"{}\"/>", jc.as_str()));
        }
        if let Some(section) = &self.section {
            section.write_xml(out, ctx);
        }

        out.push_str("</w:pPr>");
    }

    fn write_spacing(&self, out: &mut String) {
        if self.spacing_before.is_none() && self.spacing_after.is_none() && self.spacing_line.is_none()
        {
            return;
        }
        out.push_str("<w:spacing");
        if let Some(before) = self.spacing_before {
            out.push_str(&format!(" w:before=\"{}\"", before));
        }
        if let Some(after) = self.spacing_after {
            out.push_str(&format!(" w:after=\"{}\"", after));
        }
        if let Some(line) = self.spacing_line {
            out.push_str(&format!(
                " w:line=\"{}\" w:lineRule=\"{}\"",
                line,
                self.line_rule.as_str()
            ));
        }
        out.push_str("/>");
    }

    fn write_indent(&self, out: &mut String) {
        if self.indent_left.is_none()
            && self.indent_right.is_none()
            && self.indent_first_line.is_none()
            && self.indent_hanging.is_none()
        {
            return;
        }
        out.push_str("<w:ind");
        if let Some(left) = self.indent_left {
            out.push_str(&format!(" w:left=\"{}\"", left));
        }
        if let Some(right) = self.indent_right {
            out.push_str(&format!(" w:right=\"{}\"", right));
        }
        if let Some(first_line) = self.indent_first_line {
            out.push_str(&format!(" w:firstLine=\"{}\"", first_line));
        }
        if let Some(hanging) = self.indent_hanging {
            out.push_str(&format!(" w:hanging=\"{}\"", hanging));
        }
        out.push_str("/>");
    }
}

/// A paragraph: an ordered list of runs plus paragraph formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub properties: ParagraphProperties,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Paragraph {
    /// A left-aligned paragraph with widow control on
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            properties: ParagraphProperties {
                justification: Some(Justification::Left),
                widow_control: true,
                ..ParagraphProperties::default()
            },
        }
    }

    /// A paragraph with no properties at all; renders as `<w:p/>`
    pub fn empty() -> Self {
        Self {
            runs: Vec::new(),
            properties: ParagraphProperties::default(),
        }
    }

    /// Append a default run and return it
    pub fn add_run(&mut self) -> &mut Run {
        self.push_run(Run::new())
    }

    /// Append a run holding `text`
    pub fn add_text<S: Into<String>>(&mut self, text: S) -> &mut Run {
        let mut run = Run::new();
        run.add_text(text);
        self.push_run(run)
    }

    /// Append a run holding a break
    pub fn add_break(&mut self, break_type: BreakType) -> &mut Run {
        let mut run = Run::new();
        run.add_break(break_type);
        self.push_run(run)
    }

    /// Append a run holding a picture
    pub fn add_drawing(&mut self, drawing: Drawing) -> &mut Run {
        let mut run = Run::new();
        run.add_drawing(drawing);
        self.push_run(run)
    }

    /// Load a picture from disk and append it. Size is in EMU.
    pub fn add_image<P: AsRef<Path>>(
        &mut self,
        path: P,
        width: i64,
        height: i64,
    ) -> DocxResult<&mut Run> {
        let mut drawing = Drawing::from_path(path)?;
        drawing.set_size(width, height);
        Ok(self.add_drawing(drawing))
    }

    /// Append a complex field as sibling runs: begin, instruction,
    /// separate, the placeholder shown until the field is updated, end.
    pub fn add_field(&mut self, instruction: &str, placeholder: &str) -> &mut Self {
        self.add_run().add_field(Field::Begin);
        self.add_run()
            .add_field(Field::Instruction(instruction.to_string()));
        self.add_run().add_field(Field::Separate);
        self.add_text(placeholder);
        self.add_run().add_field(Field::End);
        self
    }

    /// Append a PAGE field
    pub fn add_page_number(&mut self) -> &mut Self {
        self.add_field("PAGE", "1")
    }

    fn push_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Concatenated text of every text run
    pub fn text(&self) -> String {
        self.runs.iter().filter_map(Run::text).collect()
    }

    pub fn set_style<S: Into<String>>(&mut self, style: S) -> &mut Self {
        self.properties.style = style.into();
        self
    }

    pub fn set_alignment(&mut self, justification: Justification) -> &mut Self {
        self.properties.justification = Some(justification);
        self
    }

    pub fn set_keep_next(&mut self, keep_next: bool) -> &mut Self {
        self.properties.keep_next = keep_next;
        self
    }

    pub fn set_keep_lines(&mut self, keep_lines: bool) -> &mut Self {
        self.properties.keep_lines = keep_lines;
        self
    }

    pub fn set_page_break_before(&mut self, page_break_before: bool) -> &mut Self {
        self.properties.page_break_before = page_break_before;
        self
    }

    pub fn set_widow_control(&mut self, widow_control: bool) -> &mut Self {
        self.properties.widow_control = widow_control;
        self
    }

    /// Make this paragraph an item of list `num_id` at `level` (0-based)
    pub fn set_numbering(&mut self, num_id: u32, level: u32) -> &mut Self {
        self.properties.numbering = Some(NumberingRef { num_id, level });
        self
    }

    pub fn set_spacing_before(&mut self, twips: i32) -> &mut Self {
        self.properties.spacing_before = Some(twips);
        self
    }

    pub fn set_spacing_after(&mut self, twips: i32) -> &mut Self {
        self.properties.spacing_after = Some(twips);
        self
    }

    /// Line spacing: 240 is single spacing under [`LineRule::Auto`]
    pub fn set_spacing_line(&mut self, line: i32, rule: LineRule) -> &mut Self {
        self.properties.spacing_line = Some(line);
        self.properties.line_rule = rule;
        self
    }

    pub fn set_indent_left(&mut self, twips: i32) -> &mut Self {
        self.properties.indent_left = Some(twips);
        self
    }

    pub fn set_indent_right(&mut self, twips: i32) -> &mut Self {
        self.properties.indent_right = Some(twips);
        self
    }

    pub fn set_indent_first_line(&mut self, twips: i32) -> &mut Self {
        self.properties.indent_first_line = Some(twips);
        self
    }

    pub fn set_indent_hanging(&mut self, twips: i32) -> &mut Self {
        self.properties.indent_hanging = Some(twips);
        self
    }

    /// Set a border. Inside positions only apply to tables and are ignored.
    pub fn set_border(
        &mut self,
        position: BorderPosition,
        style: &str,
        size: i32,
        color: &str,
        space: i32,
    ) -> &mut Self {
        let border = Border::new(style, size, color).with_space(space);
        let borders = &mut self.properties.borders;
        match position {
            BorderPosition::Top => borders.top = Some(border),
            BorderPosition::Left => borders.left = Some(border),
            BorderPosition::Bottom => borders.bottom = Some(border),
            BorderPosition::Right => borders.right = Some(border),
            BorderPosition::All => {
                borders.top = Some(border.clone());
                borders.left = Some(border.clone());
                borders.bottom = Some(border.clone());
                borders.right = Some(border);
            }
            BorderPosition::InsideH | BorderPosition::InsideV => {}
        }
        self
    }

    pub fn set_shading(&mut self, fill: &str, color: &str, pattern: &str) -> &mut Self {
        self.properties.shading = Some(Shading::new(fill, color, pattern));
        self
    }

    /// Give `font` to every occurrence of `needle` in the paragraph's text.
    ///
    /// Text runs are split at each match so only the matched characters
    /// change font; the pieces keep the original run's other properties.
    /// An empty needle applies the font to every run. Matches do not span
    /// run boundaries.
    pub fn set_font_family_for_text(&mut self, font: &str, needle: &str) -> &mut Self {
        if needle.is_empty() {
            for run in &mut self.runs {
                run.set_font_family(font);
            }
            return self;
        }

        let mut runs = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if !run.text().is_some_and(|text| text.contains(needle)) {
                runs.push(run);
                continue;
            }

            let mut rest = run.text().unwrap_or_default();
            while let Some(pos) = rest.find(needle) {
                if pos > 0 {
                    runs.push(run.with_text(&rest[..pos]));
                }
                let mut matched = run.with_text(needle);
                matched.set_font_family(font);
                runs.push(matched);
                rest = &rest[pos + needle.len()..];
            }
            if !rest.is_empty() {
                runs.push(run.with_text(rest));
            }
        }
        self.runs = runs;
        self
    }

    /// Pictures held by this paragraph's runs, in order
    pub fn drawings(&self) -> impl Iterator<Item = &Drawing> {
        self.runs.iter().filter_map(Run::drawing)
    }

    /// Serialize with placeholder relationship IDs
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out, &mut RenderContext::detached());
        out
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        if self.runs.is_empty() && self.properties.is_empty() {
            out.push_str("<w:p/>");
            return;
        }
        out.push_str("<w:p>");
        self.properties.write_xml(out, ctx);
        for run in &self.runs {
            run.write_xml(out, ctx);
        }
        out.push_str("</w:p>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::RunContent;
    use pretty_assertions::assert_eq;

    fn positions(xml: &str, tags: &[&str]) -> Vec<usize> {
        tags.iter()
            .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("missing {tag} in {xml}")))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let xml = Paragraph::new().to_xml();
        assert_eq!(
            xml,
            r#"<w:p><w:pPr><w:widowControl/><w:jc w:val="left"/></w:pPr></w:p>"#
        );
        assert_eq!(Paragraph::empty().to_xml(), "<w:p/>");
    }

    #[test]
    fn test_property_order() {
        let mut p = Paragraph::new();
        p.set_alignment(Justification::Center)
            .set_indent_left(720)
            .set_spacing_before(120)
            .set_shading("EEEEEE", "auto", "clear")
            .set_border(BorderPosition::Bottom, "single", 6, "000000", 1)
            .set_numbering(3, 0)
            .set_page_break_before(true)
            .set_keep_lines(true)
            .set_keep_next(true)
            .set_style("Heading1");
        let xml = p.to_xml();

        let order = positions(
            &xml,
            &[
                "<w:pStyle",
                "<w:keepNext/>",
                "<w:keepLines/>",
                "<w:pageBreakBefore/>",
                "<w:widowControl/>",
                "<w:numPr>",
                "<w:pBdr>",
                "<w:shd",
                "<w:spacing",
                "<w:ind",
                "<w:jc",
            ],
        );
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{xml}");
        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="3"/></w:numPr>"#));
    }

    #[test]
    fn test_border_all_sets_four_edges() {
        let mut p = Paragraph::new();
        p.set_border(BorderPosition::All, "double", 4, "FF0000", 0);
        let xml = p.to_xml();
        let order = positions(&xml, &["<w:top ", "<w:left ", "<w:bottom ", "<w:right "]);
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(!xml.contains("insideH"));
    }

    #[test]
    fn test_spacing_and_indent_attributes() {
        let mut p = Paragraph::empty();
        p.set_spacing_after(200)
            .set_spacing_line(276, LineRule::Auto)
            .set_indent_left(720)
            .set_indent_hanging(360);
        assert_eq!(
            p.to_xml(),
            concat!(
                "<w:p><w:pPr>",
                r#"<w:spacing w:after="200" w:line="276" w:lineRule="auto"/>"#,
                r#"<w:ind w:left="720" w:hanging="360"/>"#,
                "</w:pPr></w:p>"
            )
        );
    }

    #[test]
    fn test_field_is_five_sibling_runs() {
        let mut p = Paragraph::new();
        p.add_page_number();
        assert_eq!(p.runs.len(), 5);
        assert_eq!(p.runs[0].content, RunContent::Field(Field::Begin));
        assert_eq!(
            p.runs[1].content,
            RunContent::Field(Field::Instruction("PAGE".into()))
        );
        assert_eq!(p.runs[2].content, RunContent::Field(Field::Separate));
        assert_eq!(p.runs[3].text(), Some("1"));
        assert_eq!(p.runs[4].content, RunContent::Field(Field::End));

        let xml = p.to_xml();
        assert_eq!(xml.matches("<w:r>").count(), 5);
        assert!(!xml.contains("<w:r><w:r>"));
    }

    #[test]
    fn test_font_for_text_splits_runs() {
        let mut p = Paragraph::new();
        p.add_text("x = αβ + αβ").set_bold(true);
        p.set_font_family_for_text("Symbol", "αβ");

        let texts: Vec<_> = p.runs.iter().map(|r| r.text().unwrap_or_default()).collect();
        assert_eq!(texts, vec!["x = ", "αβ", " + ", "αβ"]);
        assert_eq!(p.runs[0].properties.font_family, "Calibri");
        assert_eq!(p.runs[1].properties.font_family, "Symbol");
        assert_eq!(p.runs[3].properties.font_family, "Symbol");
        assert!(p.runs.iter().all(|r| r.properties.bold));
        assert_eq!(p.text(), "x = αβ + αβ");
    }

    #[test]
    fn test_font_for_text_without_match_is_noop() {
        let mut p = Paragraph::new();
        p.add_text("plain");
        p.add_break(BreakType::TextWrapping);
        let before = p.clone();
        p.set_font_family_for_text("Symbol", "zzz");
        assert_eq!(p, before);

        p.set_font_family_for_text("Courier New", "");
        assert!(p.runs.iter().all(|r| r.properties.font_family == "Courier New"));
    }

    #[test]
    fn test_section_closes_inside_ppr() {
        let mut p = Paragraph::new();
        p.properties.section = Some(Box::new(SectionProperties::new()));
        let xml = p.to_xml();
        assert!(xml.contains(r#"<w:jc w:val="left"/><w:sectPr>"#));
        assert!(xml.ends_with("</w:sectPr></w:pPr></w:p>"));
    }
}
