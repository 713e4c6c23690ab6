//! The document body (`w:body`)

use crate::block::{self, BlockContent};
use crate::paragraph::Paragraph;
use crate::render::RenderContext;
use crate::run::BreakType;
use crate::section::SectionProperties;
use crate::table::Table;

/// Block content plus the final section's layout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    pub content: Vec<BlockContent>,
    /// Layout of the last (or only) section
    pub section: SectionProperties,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        block::push_paragraph(&mut self.content, Paragraph::new())
    }

    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        block::push_table(&mut self.content, Table::new(rows, cols))
    }

    /// Append a paragraph holding a page break
    pub fn add_page_break(&mut self) -> &mut Paragraph {
        let paragraph = self.add_paragraph();
        paragraph.add_break(BreakType::Page);
        paragraph
    }

    /// End the current section here.
    ///
    /// The paragraph carries a copy of the current section layout; later
    /// changes to [`Body::section`] apply to the section that follows.
    pub fn add_section_break(&mut self) -> &mut Paragraph {
        let mut paragraph = Paragraph::new();
        paragraph.properties.section = Some(Box::new(self.section.clone()));
        block::push_paragraph(&mut self.content, paragraph)
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        out.push_str("<w:body>");
        block::write_blocks(&self.content, out, ctx);
        self.section.write_xml(out, ctx);
        out.push_str("</w:body>");
    }
}
