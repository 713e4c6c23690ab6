//! The document root: owns every part of a word-processing package

use std::io::{Seek, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use docweave_core::{mime, AppProperties, ContentTypes, CoreProperties, Relationships, Theme};

use crate::body::Body;
use crate::drawing::Drawing;
use crate::error::DocxResult;
use crate::header_footer::{page_number_paragraph, Footer, Header};
use crate::numbering::Numbering;
use crate::paragraph::Paragraph;
use crate::run::Run;
use crate::section::{PageSize, PaperSize};
use crate::settings::Settings;
use crate::styles::Styles;
use crate::table::Table;
use crate::types::{HeaderFooterType, Orientation};
use crate::writer::DocxWriter;

/// Image extensions declared up front in the content-type manifest
const IMAGE_EXTENSIONS: [&str; 9] = ["png", "jpeg", "jpg", "gif", "bmp", "tiff", "tif", "wmf", "emf"];

/// A word-processing document.
///
/// Build the content through the body helpers, then call [`Document::save`].
/// Relationship IDs for headers, footers and pictures are allocated when
/// the package is written, not while building.
#[derive(Debug, Clone)]
pub struct Document {
    pub body: Body,
    pub properties: CoreProperties,
    pub app_properties: AppProperties,
    pub styles: Styles,
    pub numbering: Numbering,
    pub settings: Settings,
    pub theme: Theme,
    pub content_types: ContentTypes,
    /// Caller-added relationships of the document part (e.g. hyperlinks).
    /// Part and image relationships are appended after these at save time.
    pub relationships: Relationships,
    pub headers: Vec<Header>,
    pub footers: Vec<Footer>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut content_types = ContentTypes::new();
        content_types
            .add_default("rels", mime::RELATIONSHIPS)
            .add_default("xml", mime::XML);
        for ext in IMAGE_EXTENSIONS {
            content_types.add_default(ext, mime::for_image_extension(ext));
        }
        content_types
            .add_override("/document/document.xml", mime::WORD_DOCUMENT)
            .add_override("/document/styles.xml", mime::WORD_STYLES)
            .add_override("/document/numbering.xml", mime::WORD_NUMBERING)
            .add_override("/document/settings.xml", mime::WORD_SETTINGS)
            .add_override("/document/theme/theme1.xml", mime::THEME)
            .add_override("/docProps/core.xml", mime::CORE_PROPERTIES)
            .add_override("/docProps/app.xml", mime::EXTENDED_PROPERTIES);

        Self {
            body: Body::new(),
            properties: CoreProperties::new(),
            app_properties: AppProperties::default(),
            styles: Styles::new(),
            numbering: Numbering::new(),
            settings: Settings::new(),
            theme: Theme::office(),
            content_types,
            relationships: Relationships::new(),
            headers: Vec::new(),
            footers: Vec::new(),
        }
    }

    // --- Content ---

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.add_paragraph()
    }

    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        self.body.add_table(rows, cols)
    }

    pub fn add_page_break(&mut self) -> &mut Paragraph {
        self.body.add_page_break()
    }

    pub fn add_section_break(&mut self) -> &mut Paragraph {
        self.body.add_section_break()
    }

    /// Append a centered "Page N" paragraph to the body
    pub fn add_page_number_paragraph(&mut self) -> &mut Paragraph {
        crate::block::push_paragraph(&mut self.body.content, page_number_paragraph())
    }

    /// Append a paragraph holding a picture read from `path`. Size is in EMU.
    pub fn add_image<P: AsRef<Path>>(
        &mut self,
        path: P,
        width: i64,
        height: i64,
    ) -> DocxResult<&mut Run> {
        let mut drawing = Drawing::from_path(path)?;
        drawing.set_size(width, height);
        Ok(self.add_paragraph().add_drawing(drawing))
    }

    /// Append a paragraph holding a picture from raw bytes. The media file
    /// is named `<name>.<format>`.
    pub fn add_image_bytes(
        &mut self,
        data: Vec<u8>,
        format: &str,
        name: &str,
        width: i64,
        height: i64,
    ) -> &mut Run {
        let mut drawing = Drawing::from_bytes(data, format, name);
        drawing.set_size(width, height);
        self.add_paragraph().add_drawing(drawing)
    }

    // --- Headers and footers ---

    /// Add a header part without binding it to the section
    pub fn add_header(&mut self) -> &mut Header {
        self.headers.push(Header::new());
        let number = self.headers.len();
        self.content_types.add_override(
            &format!("/document/header{}.xml", number),
            mime::WORD_HEADER,
        );
        &mut self.headers[number - 1]
    }

    /// Add a footer part without binding it to the section
    pub fn add_footer(&mut self) -> &mut Footer {
        self.footers.push(Footer::new());
        let number = self.footers.len();
        self.content_types.add_override(
            &format!("/document/footer{}.xml", number),
            mime::WORD_FOOTER,
        );
        &mut self.footers[number - 1]
    }

    /// Add a header part and reference it from the current section
    pub fn add_header_with_reference(&mut self, kind: HeaderFooterType) -> &mut Header {
        let index = self.headers.len();
        self.body.section.add_header_reference(kind, index);
        self.add_header()
    }

    /// Add a footer part and reference it from the current section
    pub fn add_footer_with_reference(&mut self, kind: HeaderFooterType) -> &mut Footer {
        let index = self.footers.len();
        self.body.section.add_footer_reference(kind, index);
        self.add_footer()
    }

    /// Reference the header at `index` (0-based, in the order added)
    pub fn add_header_reference(&mut self, kind: HeaderFooterType, index: usize) -> &mut Self {
        self.body.section.add_header_reference(kind, index);
        self
    }

    /// Reference the footer at `index` (0-based, in the order added)
    pub fn add_footer_reference(&mut self, kind: HeaderFooterType, index: usize) -> &mut Self {
        self.body.section.add_footer_reference(kind, index);
        self
    }

    // --- Page layout ---

    /// Page size in twips
    pub fn set_page_size(&mut self, width: i32, height: i32, orientation: Orientation) -> &mut Self {
        self.body.section.page_size = PageSize {
            width,
            height,
            orientation,
        };
        self
    }

    pub fn set_page_size_a4(&mut self, landscape: bool) -> &mut Self {
        self.set_paper(PaperSize::A4, landscape)
    }

    pub fn set_page_size_a5(&mut self, landscape: bool) -> &mut Self {
        self.set_paper(PaperSize::A5, landscape)
    }

    pub fn set_page_size_letter(&mut self, landscape: bool) -> &mut Self {
        self.set_paper(PaperSize::Letter, landscape)
    }

    fn set_paper(&mut self, paper: PaperSize, landscape: bool) -> &mut Self {
        let orientation = if landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        self.body.section.page_size = PageSize::paper(paper, orientation);
        self
    }

    /// Page margins in twips
    #[allow(clippy::too_many_arguments)]
    pub fn set_page_margin(
        &mut self,
        top: i32,
        right: i32,
        bottom: i32,
        left: i32,
        header: i32,
        footer: i32,
        gutter: i32,
    ) -> &mut Self {
        let m = &mut self.body.section.page_margin;
        m.top = top;
        m.right = right;
        m.bottom = bottom;
        m.left = left;
        m.header = header;
        m.footer = footer;
        m.gutter = gutter;
        self
    }

    pub fn set_columns(&mut self, num: i32, space: i32) -> &mut Self {
        self.body.section.columns.num = num;
        self.body.section.columns.space = space;
        self
    }

    // --- Properties ---

    pub fn set_title<S: Into<String>>(&mut self, title: S) -> &mut Self {
        self.properties.title = title.into();
        self
    }

    pub fn set_subject<S: Into<String>>(&mut self, subject: S) -> &mut Self {
        self.properties.subject = subject.into();
        self
    }

    /// Set the author; also recorded as the last modifier
    pub fn set_creator<S: Into<String>>(&mut self, creator: S) -> &mut Self {
        let creator = creator.into();
        self.properties.last_modified_by = creator.clone();
        self.properties.creator = creator;
        self
    }

    pub fn set_keywords<S: Into<String>>(&mut self, keywords: S) -> &mut Self {
        self.properties.keywords = keywords.into();
        self
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.properties.description = description.into();
        self
    }

    pub fn set_last_modified_by<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.properties.last_modified_by = name.into();
        self
    }

    pub fn set_revision(&mut self, revision: u32) -> &mut Self {
        self.properties.revision = revision;
        self
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) -> &mut Self {
        self.properties.created = created;
        self
    }

    pub fn set_modified(&mut self, modified: DateTime<Utc>) -> &mut Self {
        self.properties.modified = modified;
        self
    }

    // --- Output ---

    /// Write the package to `path`, creating or truncating the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> DocxResult<()> {
        DocxWriter::write_file(self, path)
    }

    /// Write the package to any seekable writer
    pub fn write<W: Write + Seek>(&self, writer: W) -> DocxResult<()> {
        DocxWriter::write(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_manifest() {
        let doc = Document::new();
        let ct = &doc.content_types;
        for ext in ["rels", "xml", "png", "jpeg", "emf"] {
            assert!(ct.has_default(ext), "missing default {ext}");
        }
        assert!(ct.override_for("/document/document.xml").is_some());
        assert!(ct.override_for("/docProps/app.xml").is_some());
        assert_eq!(doc.properties.revision, 1);
        assert!(doc.relationships.is_empty());
    }

    #[test]
    fn test_headers_register_overrides_without_references() {
        let mut doc = Document::new();
        doc.add_header();
        doc.add_footer();
        assert!(doc.content_types.override_for("/document/header1.xml").is_some());
        assert!(doc.content_types.override_for("/document/footer1.xml").is_some());
        assert!(doc.body.section.header_references.is_empty());
    }

    #[test]
    fn test_reference_helpers_use_part_index() {
        let mut doc = Document::new();
        doc.add_header();
        doc.add_header_with_reference(HeaderFooterType::First);
        doc.add_footer_with_reference(HeaderFooterType::Default);

        let header_ref = doc.body.section.header_references[0];
        assert_eq!(header_ref.index, 1);
        assert_eq!(header_ref.kind, HeaderFooterType::First);
        assert!(doc.body.section.title_page);
        assert_eq!(doc.body.section.footer_references[0].index, 0);
    }

    #[test]
    fn test_creator_sets_last_modified_by() {
        let mut doc = Document::new();
        doc.set_creator("Ada").set_title("Notes");
        assert_eq!(doc.properties.creator, "Ada");
        assert_eq!(doc.properties.last_modified_by, "Ada");
        doc.set_last_modified_by("Grace");
        assert_eq!(doc.properties.creator, "Ada");
    }

    #[test]
    fn test_page_presets() {
        let mut doc = Document::new();
        doc.set_page_size_a4(true);
        let size = doc.body.section.page_size;
        assert_eq!((size.width, size.height), (16838, 11906));
        assert_eq!(size.orientation, Orientation::Landscape);

        doc.set_page_size_letter(false)
            .set_page_margin(720, 720, 720, 720, 360, 360, 0)
            .set_columns(2, 360);
        assert_eq!(doc.body.section.page_size.width, 12240);
        assert_eq!(doc.body.section.page_margin.header, 360);
        assert_eq!(doc.body.section.columns.num, 2);
    }

    #[test]
    fn test_image_bytes_media_name() {
        let mut doc = Document::new();
        let run = doc.add_image_bytes(vec![0x89, b'P'], "png", "chart", 914400, 457200);
        let drawing = run.drawing().map(|d| (d.media_target(), d.width));
        assert_eq!(drawing, Some(("media/chart.png".to_string(), 914400)));
    }

    #[test]
    fn test_missing_image_file_is_io_error() {
        let mut doc = Document::new();
        let err = doc.add_image("/nonexistent/dir/picture.png", 1, 1);
        assert!(matches!(err, Err(crate::DocxError::Io(_))));
    }
}
