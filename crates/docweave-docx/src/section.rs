//! Section properties (`w:sectPr`): page geometry and header/footer bindings

use docweave_core::units::{A4_HEIGHT_TWIPS, A4_WIDTH_TWIPS};

use crate::render::RenderContext;
use crate::types::{HeaderFooterType, Orientation};

/// Paper sizes with a preset in [`PageSize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
}

/// Page size in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: i32,
    pub height: i32,
    pub orientation: Orientation,
}

impl Default for PageSize {
    fn default() -> Self {
        Self::paper(PaperSize::Letter, Orientation::Portrait)
    }
}

impl PageSize {
    /// Preset paper size; landscape swaps width and height
    pub fn paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (width, height) = match paper {
            PaperSize::A4 => (A4_WIDTH_TWIPS as i32, A4_HEIGHT_TWIPS as i32),
            PaperSize::A5 => (8419, 11906),
            PaperSize::Letter => (12240, 15840),
        };
        match orientation {
            Orientation::Portrait => Self {
                width,
                height,
                orientation,
            },
            Orientation::Landscape => Self {
                width: height,
                height: width,
                orientation,
            },
        }
    }
}

/// Page margins in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
    pub header: i32,
    pub footer: i32,
    pub gutter: i32,
}

impl Default for PageMargin {
    fn default() -> Self {
        Self {
            top: 1440,
            right: 1440,
            bottom: 1440,
            left: 1440,
            header: 720,
            footer: 720,
            gutter: 0,
        }
    }
}

/// Column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub num: i32,
    /// Gap between columns in twips
    pub space: i32,
}

impl Default for Columns {
    fn default() -> Self {
        Self { num: 1, space: 720 }
    }
}

/// How a section starts relative to the previous one (`w:type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionType {
    NextPage,
    Continuous,
    EvenPage,
    OddPage,
    NextColumn,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::NextPage => "nextPage",
            SectionType::Continuous => "continuous",
            SectionType::EvenPage => "evenPage",
            SectionType::OddPage => "oddPage",
            SectionType::NextColumn => "nextColumn",
        }
    }
}

/// Binds a header or footer part to a section.
///
/// `index` is the part's position in the document's header (or footer)
/// list; the relationship ID is resolved when the package is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFooterReference {
    pub kind: HeaderFooterType,
    pub index: usize,
}

/// Section layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProperties {
    pub header_references: Vec<HeaderFooterReference>,
    pub footer_references: Vec<HeaderFooterReference>,
    pub section_type: Option<SectionType>,
    pub page_size: PageSize,
    pub page_margin: PageMargin,
    pub columns: Columns,
    /// Separate first-page header/footer (`w:titlePg`)
    pub title_page: bool,
    /// Document grid line pitch in twips
    pub line_pitch: i32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self {
            header_references: Vec::new(),
            footer_references: Vec::new(),
            section_type: None,
            page_size: PageSize::default(),
            page_margin: PageMargin::default(),
            columns: Columns::default(),
            title_page: false,
            line_pitch: 360,
        }
    }
}

impl SectionProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference the header part at `index`. A first-page reference also
    /// turns on the distinct first page.
    pub fn add_header_reference(&mut self, kind: HeaderFooterType, index: usize) -> &mut Self {
        self.header_references
            .push(HeaderFooterReference { kind, index });
        self.title_page |= kind == HeaderFooterType::First;
        self
    }

    /// Reference the footer part at `index`
    pub fn add_footer_reference(&mut self, kind: HeaderFooterType, index: usize) -> &mut Self {
        self.footer_references
            .push(HeaderFooterReference { kind, index });
        self.title_page |= kind == HeaderFooterType::First;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        out.push_str("<w:sectPr>");

        for reference in &self.header_references {
            out.push_str(&format!(
                "<w:headerReference w:type=\"{}\" r:id=\"{}\"/>",
                reference.kind.as_str(),
                ctx.header_rel(reference.index)
            ));
        }
        for reference in &self.footer_references {
            out.push_str(&format!(
                "<w:footerReference w:type=\"{}\" r:id=\"{}\"/>",
                reference.kind.as_str(),
                ctx.footer_rel(reference.index)
            ));
        }
        if let Some(section_type) = self.section_type {
            out.push_str(&format!("<w:type w:val=\"{}\"/>", section_type.as_str()));
        }

        let size = &self.page_size;
        out.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\" w:orient=\"{}\"/>",
            size.width,
            size.height,
            size.orientation.as_str()
        ));

        let m = &self.page_margin;
        out.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\" w:gutter=\"{}\"/>",
            m.top, m.right, m.bottom, m.left, m.header, m.footer, m.gutter
        ));

        out.push_str(&format!(
            "<w:cols w:num=\"{}\" w:space=\"{}\"/>",
            self.columns.num, self.columns.space
        ));
        if self.title_page {
            out.push_str("<w:titlePg/>");
        }
        out.push_str(&format!("<w:docGrid w:linePitch=\"{}\"/>", self.line_pitch));

        out.push_str("</w:sectPr>");
    }
}
