//! # docweave-docx
//!
//! Word-processing (`.docx`) object model and writer for docweave.
//!
//! A [`Document`] owns the body, styles, numbering, settings, theme and any
//! header and footer parts. Content is built with fluent setters and the
//! package is written with [`Document::save`] or [`DocxWriter`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use docweave_docx::{Document, HeaderFooterType, Justification};
//!
//! let mut doc = Document::new();
//! doc.set_title("Quarterly report").set_creator("Finance");
//!
//! doc.add_paragraph()
//!     .set_alignment(Justification::Center)
//!     .add_text("Quarterly report")
//!     .set_bold(true)
//!     .set_font_size(32);
//!
//! let bullets = doc.numbering.create_bullet_list();
//! doc.add_paragraph().set_numbering(bullets, 0).add_text("Revenue up");
//!
//! doc.add_footer_with_reference(HeaderFooterType::Default)
//!     .add_page_number();
//!
//! doc.save("report.docx")?;
//! # Ok::<(), docweave_docx::DocxError>(())
//! ```

pub mod block;
pub mod body;
pub mod document;
pub mod drawing;
pub mod error;
pub mod header_footer;
pub mod numbering;
pub mod paragraph;
pub mod render;
pub mod run;
pub mod section;
pub mod settings;
pub mod styles;
pub mod table;
pub mod types;
pub mod writer;

pub use block::BlockContent;
pub use body::Body;
pub use document::Document;
pub use drawing::{Drawing, DrawingPosition, WrapType};
pub use error::{DocxError, DocxResult};
pub use header_footer::{Footer, Header};
pub use numbering::{
    AbstractNum, LevelOverride, LevelSuffix, Num, NumberFormat, Numbering, NumberingLevel,
};
pub use paragraph::{NumberingRef, Paragraph, ParagraphBorders, ParagraphProperties};
pub use render::RenderContext;
pub use run::{BreakType, Field, Run, RunContent, RunProperties, VerticalTextAlign};
pub use section::{
    Columns, HeaderFooterReference, PageMargin, PageSize, PaperSize, SectionProperties,
    SectionType,
};
pub use settings::{Compatibility, Settings};
pub use styles::{Style, Styles};
pub use table::{
    CellMargins, CellVerticalAlign, HeightRule, Table, TableBorders, TableCell,
    TableCellProperties, TableLayout, TableLook, TableProperties, TableRow, TableRowProperties,
    VMerge,
};
pub use types::{
    Border, BorderPosition, HeaderFooterType, Justification, LineRule, Orientation, Shading,
    StyleType, TableWidth,
};
pub use writer::{DocxWriter, RelationshipPlan};
