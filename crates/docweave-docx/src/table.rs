//! Tables (`w:tbl`), rows and cells

use docweave_core::xml::{bool_attr, escape};

use crate::block::{self, BlockContent};
use crate::paragraph::Paragraph;
use crate::render::RenderContext;
use crate::types::{Border, BorderPosition, Justification, Shading, TableWidth};

/// Table layout algorithm (`w:tblLayout`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    #[default]
    Autofit,
    Fixed,
}

impl TableLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            TableLayout::Autofit => "autofit",
            TableLayout::Fixed => "fixed",
        }
    }
}

/// The six table border lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBorders {
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
    pub inside_h: Option<Border>,
    pub inside_v: Option<Border>,
}

impl Default for TableBorders {
    /// Single black grid lines everywhere
    fn default() -> Self {
        Self {
            top: Some(Border::single()),
            left: Some(Border::single()),
            bottom: Some(Border::single()),
            right: Some(Border::single()),
            inside_h: Some(Border::single()),
            inside_v: Some(Border::single()),
        }
    }
}

impl TableBorders {
    /// No borders set
    pub fn none() -> Self {
        Self {
            top: None,
            left: None,
            bottom: None,
            right: None,
            inside_h: None,
            inside_v: None,
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::none()
    }

    fn set(&mut self, position: BorderPosition, border: Border) {
        match position {
            BorderPosition::Top => self.top = Some(border),
            BorderPosition::Left => self.left = Some(border),
            BorderPosition::Bottom => self.bottom = Some(border),
            BorderPosition::Right => self.right = Some(border),
            BorderPosition::InsideH => self.inside_h = Some(border),
            BorderPosition::InsideV => self.inside_v = Some(border),
            BorderPosition::All => {
                self.top = Some(border.clone());
                self.left = Some(border.clone());
                self.bottom = Some(border.clone());
                self.right = Some(border.clone());
                self.inside_h = Some(border.clone());
                self.inside_v = Some(border);
            }
        }
    }

    fn write_xml(&self, out: &mut String, tag: &str, include_inside: bool) {
        out.push_str(&format!("<w:{}>", tag));
        let mut edges = vec![
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
        ];
        if include_inside {
            edges.push(("insideH", &self.inside_h));
            edges.push(("insideV", &self.inside_v));
        }
        for (edge, border) in edges {
            if let Some(border) = border {
                border.write_xml(out, edge);
            }
        }
        out.push_str(&format!("</w:{}>", tag));
    }
}

/// Default cell margins for the whole table, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMargins {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Default for CellMargins {
    fn default() -> Self {
        Self {
            top: 0,
            left: 108,
            bottom: 0,
            right: 108,
        }
    }
}

/// Which conditional table-style formats apply (`w:tblLook`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableLook {
    pub first_row: bool,
    pub last_row: bool,
    pub first_column: bool,
    pub last_column: bool,
    pub no_h_band: bool,
    pub no_v_band: bool,
}

impl TableLook {
    /// Legacy bitmask form of the flags
    pub fn bits(&self) -> u16 {
        let flags = [
            (self.first_row, 0x0020),
            (self.last_row, 0x0040),
            (self.first_column, 0x0080),
            (self.last_column, 0x0100),
            (self.no_h_band, 0x0200),
            (self.no_v_band, 0x0400),
        ];
        flags
            .iter()
            .filter(|(on, _)| *on)
            .fold(0, |acc, (_, bit)| acc | bit)
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str(&format!(
            "<w:tblLook w:val=\"{:04X}\" w:firstRow=\"{}\" w:lastRow=\"{}\" w:firstColumn=\"{}\" w:lastColumn=\"{}\" w:noHBand=\"{}\" w:noVBand=\"{}\"/>",
            self.bits(),
            bool_attr(self.first_row),
            bool_attr(self.last_row),
            bool_attr(self.first_column),
            bool_attr(self.last_column),
            bool_attr(self.no_h_band),
            bool_attr(self.no_v_band)
        ));
    }
}

/// Table formatting (`w:tblPr`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProperties {
    /// Table style ID
    pub style: String,
    pub width: TableWidth,
    pub justification: Justification,
    /// Indent from the leading margin in twips; zero is unset
    pub indent: i32,
    pub borders: TableBorders,
    pub layout: TableLayout,
    pub cell_margins: CellMargins,
    pub look: Option<TableLook>,
}

impl Default for TableProperties {
    fn default() -> Self {
        Self {
            style: String::new(),
            width: TableWidth::Auto,
            justification: Justification::Left,
            indent: 0,
            borders: TableBorders::default(),
            layout: TableLayout::Autofit,
            cell_margins: CellMargins::default(),
            look: None,
        }
    }
}

impl TableProperties {
    pub(crate) fn write_xml(&self, out: &mut String) {
        out.push_str("<w:tblPr>");
        if !self.style.is_empty() {
            out.push_str(&format!("<w:tblStyle w:val=\"{}\"/>", escape(&self.style)));
        }
        self.width.write_xml(out, "tblW");
        out.push_str(&format!("<w:jc w:val=\"{}\"/>", self.justification.as_str()));
        if self.indent > 0 {
            out.push_str(&format!("<w:tblInd w:w=\"{}\" w:type=\"dxa\"/>", self.indent));
        }
        if !self.borders.is_empty() {
            self.borders.write_xml(out, "tblBorders", true);
        }
        out.push_str(&format!("<w:tblLayout w:type=\"{}\"/>", self.layout.as_str()));

        let m = &self.cell_margins;
        let margins = [("top", m.top), ("left", m.left), ("bottom", m.bottom), ("right", m.right)];
        if margins.iter().any(|(_, w)| *w > 0) {
            out.push_str("<w:tblCellMar>");
            for (edge, w) in margins.iter().filter(|(_, w)| *w > 0) {
                out.push_str(&format!("<w:{} w:w=\"{}\" w:type=\"dxa\"/>", edge, w));
            }
            out.push_str("</w:tblCellMar>");
        }
        if let Some(look) = &self.look {
            look.write_xml(out);
        }
        out.push_str("</w:tblPr>");
    }
}

/// A table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<TableRow>,
    pub properties: TableProperties,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Table {
    /// A `rows` x `cols` grid of empty cells
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut table = Self {
            rows: Vec::with_capacity(rows),
            properties: TableProperties::default(),
        };
        for _ in 0..rows {
            let row = table.add_row();
            for _ in 0..cols {
                row.add_cell();
            }
        }
        table
    }

    /// Append an empty row
    pub fn add_row(&mut self) -> &mut TableRow {
        self.rows.push(TableRow::new());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Cell at `row`, `col`, if present
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    pub fn set_width(&mut self, width: TableWidth) -> &mut Self {
        self.properties.width = width;
        self
    }

    pub fn set_alignment(&mut self, justification: Justification) -> &mut Self {
        self.properties.justification = justification;
        self
    }

    pub fn set_indent(&mut self, twips: i32) -> &mut Self {
        self.properties.indent = twips;
        self
    }

    pub fn set_layout(&mut self, layout: TableLayout) -> &mut Self {
        self.properties.layout = layout;
        self
    }

    pub fn set_style<S: Into<String>>(&mut self, style: S) -> &mut Self {
        self.properties.style = style.into();
        self
    }

    /// Set border lines. An empty style means `none`, an empty color black.
    pub fn set_borders(
        &mut self,
        position: BorderPosition,
        style: &str,
        size: i32,
        color: &str,
    ) -> &mut Self {
        self.properties
            .borders
            .set(position, Border::normalized(style, size, color));
        self
    }

    /// Set a default cell margin; `All` sets the four edges
    pub fn set_cell_margin(&mut self, position: BorderPosition, twips: i32) -> &mut Self {
        let m = &mut self.properties.cell_margins;
        match position {
            BorderPosition::Top => m.top = twips,
            BorderPosition::Left => m.left = twips,
            BorderPosition::Bottom => m.bottom = twips,
            BorderPosition::Right => m.right = twips,
            BorderPosition::All => {
                m.top = twips;
                m.left = twips;
                m.bottom = twips;
                m.right = twips;
            }
            BorderPosition::InsideH | BorderPosition::InsideV => {}
        }
        self
    }

    pub fn set_look(&mut self, look: TableLook) -> &mut Self {
        self.properties.look = Some(look);
        self
    }

    /// Serialize with placeholder relationship IDs
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out, &mut RenderContext::detached());
        out
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        out.push_str("<w:tbl>");
        self.properties.write_xml(out);

        out.push_str("<w:tblGrid>");
        if let Some(first) = self.rows.first() {
            for cell in &first.cells {
                match cell.properties.width {
                    TableWidth::Dxa(w) => out.push_str(&format!("<w:gridCol w:w=\"{}\"/>", w)),
                    _ => out.push_str("<w:gridCol/>"),
                }
            }
        }
        out.push_str("</w:tblGrid>");

        for row in &self.rows {
            row.write_xml(out, ctx);
        }
        out.push_str("</w:tbl>");
    }
}

/// Row height rule (`w:hRule`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightRule {
    #[default]
    Auto,
    AtLeast,
    Exact,
}

impl HeightRule {
    pub fn as_str(self) -> &'static str {
        match self {
            HeightRule::Auto => "auto",
            HeightRule::AtLeast => "atLeast",
            HeightRule::Exact => "exact",
        }
    }
}

/// Row formatting (`w:trPr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableRowProperties {
    /// Height in twips; zero is unset
    pub height: i32,
    pub height_rule: HeightRule,
    pub cant_split: bool,
    /// Repeat as header row on each page
    pub is_header: bool,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub properties: TableRowProperties,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty cell
    pub fn add_cell(&mut self) -> &mut TableCell {
        self.cells.push(TableCell::new());
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    pub fn set_height(&mut self, twips: i32, rule: HeightRule) -> &mut Self {
        self.properties.height = twips;
        self.properties.height_rule = rule;
        self
    }

    pub fn set_cant_split(&mut self, cant_split: bool) -> &mut Self {
        self.properties.cant_split = cant_split;
        self
    }

    pub fn set_header(&mut self, is_header: bool) -> &mut Self {
        self.properties.is_header = is_header;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        out.push_str("<w:tr>");
        let p = &self.properties;
        if p.height > 0 || p.cant_split || p.is_header {
            out.push_str("<w:trPr>");
            if p.height > 0 {
                out.push_str(&format!(
                    "<w:trHeight w:val=\"{}\" w:hRule=\"{}\"/>",
                    p.height,
                    p.height_rule.as_str()
                ));
            }
            if p.cant_split {
                out.push_str("<w:cantSplit/>");
            }
            if p.is_header {
                out.push_str("<w:tblHeader/>");
            }
            out.push_str("</w:trPr>");
        }
        for cell in &self.cells {
            cell.write_xml(out, ctx);
        }
        out.push_str("</w:tr>");
    }
}

/// Vertical merge state (`w:vMerge`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMerge {
    /// First cell of a merged range
    Restart,
    /// Covered by the cell above
    Continue,
}

impl VMerge {
    pub fn as_str(self) -> &'static str {
        match self {
            VMerge::Restart => "restart",
            VMerge::Continue => "continue",
        }
    }
}

/// Vertical alignment of cell content (`w:vAlign`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellVerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl CellVerticalAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            CellVerticalAlign::Top => "top",
            CellVerticalAlign::Center => "center",
            CellVerticalAlign::Bottom => "bottom",
        }
    }
}

/// Cell formatting (`w:tcPr`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCellProperties {
    pub width: TableWidth,
    /// Number of grid columns spanned
    pub grid_span: u32,
    pub v_merge: Option<VMerge>,
    pub borders: TableBorders,
    pub shading: Option<Shading>,
    pub no_wrap: bool,
    pub fit_text: bool,
    pub vertical_align: Option<CellVerticalAlign>,
}

impl Default for TableCellProperties {
    fn default() -> Self {
        Self {
            width: TableWidth::Auto,
            grid_span: 1,
            v_merge: None,
            borders: TableBorders::none(),
            shading: None,
            no_wrap: false,
            fit_text: false,
            vertical_align: Some(CellVerticalAlign::Top),
        }
    }
}

/// A table cell. Holds block content, including nested tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    pub content: Vec<BlockContent>,
    pub properties: TableCellProperties,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        block::push_paragraph(&mut self.content, Paragraph::new())
    }

    /// Append a nested table
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        block::push_table(&mut self.content, Table::new(rows, cols))
    }

    pub fn set_width(&mut self, width: TableWidth) -> &mut Self {
        self.properties.width = width;
        self
    }

    pub fn set_vertical_align(&mut self, align: CellVerticalAlign) -> &mut Self {
        self.properties.vertical_align = Some(align);
        self
    }

    /// Set cell borders. Inside positions do not apply to cells and are ignored.
    pub fn set_borders(
        &mut self,
        position: BorderPosition,
        style: &str,
        size: i32,
        color: &str,
    ) -> &mut Self {
        let border = Border::normalized(style, size, color);
        let borders = &mut self.properties.borders;
        match position {
            BorderPosition::InsideH | BorderPosition::InsideV => {}
            BorderPosition::All => {
                borders.top = Some(border.clone());
                borders.left = Some(border.clone());
                borders.bottom = Some(border.clone());
                borders.right = Some(border);
            }
            edge => borders.set(edge, border),
        }
        self
    }

    pub fn set_shading(&mut self, fill: &str, color: &str, pattern: &str) -> &mut Self {
        self.properties.shading = Some(Shading::new(fill, color, pattern));
        self
    }

    pub fn set_grid_span(&mut self, span: u32) -> &mut Self {
        self.properties.grid_span = span;
        self
    }

    pub fn set_v_merge(&mut self, v_merge: VMerge) -> &mut Self {
        self.properties.v_merge = Some(v_merge);
        self
    }

    pub fn set_no_wrap(&mut self, no_wrap: bool) -> &mut Self {
        self.properties.no_wrap = no_wrap;
        self
    }

    pub fn set_fit_text(&mut self, fit_text: bool) -> &mut Self {
        self.properties.fit_text = fit_text;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        out.push_str("<w:tc><w:tcPr>");
        let p = &self.properties;
        p.width.write_xml(out, "tcW");
        if p.grid_span > 1 {
            out.push_str(&format!("<w:gridSpan w:val=\"{}\"/>", p.grid_span));
        }
        if let Some(v_merge) = p.v_merge {
            out.push_str(&format!("<w:vMerge w:val=\"{}\"/>", v_merge.as_str()));
        }
        if !p.borders.is_empty() {
            p.borders.write_xml(out, "tcBorders", false);
        }
        if let Some(shading) = &p.shading {
            shading.write_xml(out);
        }
        if p.no_wrap {
            out.push_str("<w:noWrap/>");
        }
        if p.fit_text {
            out.push_str("<w:tcFitText/>");
        }
        if let Some(align) = p.vertical_align {
            out.push_str(&format!("<w:vAlign w:val=\"{}\"/>", align.as_str()));
        }
        out.push_str("</w:tcPr>");

        block::write_blocks(&self.content, out, ctx);
        // a cell must end with a paragraph
        if !matches!(self.content.last(), Some(BlockContent::Paragraph(_))) {
            out.push_str("<w:p/>");
        }
        out.push_str("</w:tc>");
    }
}
