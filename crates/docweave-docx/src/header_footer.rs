//! Header and footer parts (`w:hdr`, `w:ftr`)

use docweave_core::xml::{NS_R, NS_W, NS_WP, XML_DECLARATION};

use crate::block::{self, BlockContent};
use crate::paragraph::Paragraph;
use crate::render::RenderContext;
use crate::table::Table;
use crate::types::Justification;

/// Centered "Page N" paragraph with a live PAGE field
pub(crate) fn page_number_paragraph() -> Paragraph {
    let mut paragraph = Paragraph::new();
    paragraph.set_alignment(Justification::Center);
    paragraph.add_text("Page ");
    paragraph.add_page_number();
    paragraph
}

fn write_part(root: &str, content: &[BlockContent], ctx: &mut RenderContext) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(XML_DECLARATION);
    out.push_str(&format!(
        "<w:{} xmlns:w=\"{}\" xmlns:r=\"{}\" xmlns:wp=\"{}\">",
        root, NS_W, NS_R, NS_WP
    ));
    if content.is_empty() {
        // w:hdr and w:ftr need at least one block
        out.push_str("<w:p/>");
    } else {
        block::write_blocks(content, &mut out, ctx);
    }
    out.push_str(&format!("</w:{}>", root));
    out
}

/// A header part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    pub content: Vec<BlockContent>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        block::push_paragraph(&mut self.content, Paragraph::new())
    }

    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        block::push_table(&mut self.content, Table::new(rows, cols))
    }

    /// Append a centered page-number paragraph
    pub fn add_page_number(&mut self) -> &mut Paragraph {
        block::push_paragraph(&mut self.content, page_number_paragraph())
    }

    /// Serialize the part with placeholder relationship IDs
    pub fn to_xml(&self) -> String {
        self.render(&mut RenderContext::detached())
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext) -> String {
        write_part("hdr", &self.content, ctx)
    }
}

/// A footer part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Footer {
    pub content: Vec<BlockContent>,
}

impl Footer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        block::push_paragraph(&mut self.content, Paragraph::new())
    }

    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        block::push_table(&mut self.content, Table::new(rows, cols))
    }

    /// Append a centered page-number paragraph
    pub fn add_page_number(&mut self) -> &mut Paragraph {
        block::push_paragraph(&mut self.content, page_number_paragraph())
    }

    /// Serialize the part with placeholder relationship IDs
    pub fn to_xml(&self) -> String {
        self.render(&mut RenderContext::detached())
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext) -> String {
        write_part("ftr", &self.content, ctx)
    }
}
