//! Block-level content shared by the body, table cells, headers and footers

use crate::drawing::Drawing;
use crate::paragraph::Paragraph;
use crate::render::RenderContext;
use crate::table::Table;

/// A paragraph or a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    Paragraph(Paragraph),
    Table(Table),
}

impl BlockContent {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            BlockContent::Paragraph(p) => Some(p),
            BlockContent::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            BlockContent::Table(t) => Some(t),
            BlockContent::Paragraph(_) => None,
        }
    }

    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            BlockContent::Paragraph(p) => Some(p),
            BlockContent::Table(_) => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            BlockContent::Table(t) => Some(t),
            BlockContent::Paragraph(_) => None,
        }
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        match self {
            BlockContent::Paragraph(p) => p.write_xml(out, ctx),
            BlockContent::Table(t) => t.write_xml(out, ctx),
        }
    }
}

pub(crate) fn push_paragraph(blocks: &mut Vec<BlockContent>, paragraph: Paragraph) -> &mut Paragraph {
    blocks.push(BlockContent::Paragraph(paragraph));
    match blocks.last_mut() {
        Some(BlockContent::Paragraph(p)) => p,
        _ => unreachable!("a paragraph was just pushed"),
    }
}

pub(crate) fn push_table(blocks: &mut Vec<BlockContent>, table: Table) -> &mut Table {
    blocks.push(BlockContent::Table(table));
    match blocks.last_mut() {
        Some(BlockContent::Table(t)) => t,
        _ => unreachable!("a table was just pushed"),
    }
}

pub(crate) fn write_blocks(blocks: &[BlockContent], out: &mut String, ctx: &mut RenderContext) {
    for block in blocks {
        block.write_xml(out, ctx);
    }
}

/// Collect every drawing in `blocks`, descending into tables, in document order
pub(crate) fn collect_drawings<'a>(blocks: &'a [BlockContent], found: &mut Vec<&'a Drawing>) {
    for block in blocks {
        match block {
            BlockContent::Paragraph(p) => found.extend(p.drawings()),
            BlockContent::Table(t) => {
                for row in &t.rows {
                    for cell in &row.cells {
                        collect_drawings(&cell.content, found);
                    }
                }
            }
        }
    }
}
