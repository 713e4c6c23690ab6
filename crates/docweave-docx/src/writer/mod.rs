//! DOCX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use docweave_core::xml::{NS_R, NS_W, NS_WP, XML_DECLARATION};
use docweave_core::{mime, rel_type, PackageWriter, Relationships};

use crate::block;
use crate::document::Document;
use crate::drawing::Drawing;
use crate::error::{DocxError, DocxResult};
use crate::render::RenderContext;

/// Path of the main document part inside the package
pub const DOCUMENT_PART: &str = "document/document.xml";

/// Relationship IDs for one save, allocated in a single pass over the
/// finished content tree.
///
/// Allocation order: the document's own relationships, then styles,
/// numbering, settings and theme, then every header, every footer, and
/// finally one image relationship per distinct picture in the order the
/// pictures appear (body, headers, footers).
///
/// Pictures sharing a media name and bytes share one part. A picture whose
/// media name is taken by different bytes is stored as `<stem><n>.<ext>`
/// with the lowest free `n` from 2.
#[derive(Debug)]
pub struct RelationshipPlan<'a> {
    /// Everything written to `document/_rels/document.xml.rels`
    pub relationships: Relationships,
    /// Relationship ID per header part, by index
    pub header_rels: Vec<String>,
    /// Relationship ID per footer part, by index
    pub footer_rels: Vec<String>,
    /// Relationship ID per media target (`media/<name>`)
    pub image_rels: AHashMap<String, String>,
    /// Media parts to write: target and the drawing holding the bytes
    pub media: Vec<(String, &'a Drawing)>,
    /// Every picture in scan order with its relationship ID
    pub drawings: Vec<(&'a Drawing, String)>,
}

impl<'a> RelationshipPlan<'a> {
    /// Allocate every relationship the document needs.
    ///
    /// Fails with [`DocxError::MissingImage`] when a picture has no bytes or
    /// no media name.
    pub fn allocate(document: &'a Document) -> DocxResult<Self> {
        let mut relationships = document.relationships.clone();
        relationships.add(rel_type::STYLES, "styles.xml");
        relationships.add(rel_type::NUMBERING, "numbering.xml");
        relationships.add(rel_type::SETTINGS, "settings.xml");
        relationships.add(rel_type::THEME, "theme/theme1.xml");

        let header_rels = (1..=document.headers.len())
            .map(|n| relationships.add(rel_type::HEADER, &format!("header{}.xml", n)))
            .collect();
        let footer_rels = (1..=document.footers.len())
            .map(|n| relationships.add(rel_type::FOOTER, &format!("footer{}.xml", n)))
            .collect();

        let mut found = Vec::new();
        block::collect_drawings(&document.body.content, &mut found);
        for header in &document.headers {
            block::collect_drawings(&header.content, &mut found);
        }
        for footer in &document.footers {
            block::collect_drawings(&footer.content, &mut found);
        }

        let mut image_rels: AHashMap<String, String> = AHashMap::new();
        let mut by_content: AHashMap<(&'a str, &'a [u8]), String> = AHashMap::new();
        let mut media = Vec::new();
        let mut drawings = Vec::with_capacity(found.len());
        for drawing in found {
            let data = match drawing.image_data.as_deref() {
                Some(data) if !drawing.media_name.is_empty() => data,
                _ => {
                    let name = if drawing.media_name.is_empty() {
                        &drawing.name
                    } else {
                        &drawing.media_name
                    };
                    return Err(DocxError::MissingImage(name.clone()));
                }
            };

            let key = (drawing.media_name.as_str(), data);
            let id = match by_content.get(&key) {
                Some(id) => id.clone(),
                None => {
                    let target = free_media_target(drawing, &image_rels);
                    if target != drawing.media_target() {
                        log::debug!("media {} renamed to {}", drawing.media_name, target);
                    }
                    let id = relationships.add(rel_type::IMAGE, &target);
                    image_rels.insert(target.clone(), id.clone());
                    by_content.insert(key, id.clone());
                    media.push((target, drawing));
                    id
                }
            };
            drawings.push((drawing, id));
        }

        Ok(Self {
            relationships,
            header_rels,
            footer_rels,
            image_rels,
            media,
            drawings,
        })
    }

    /// Render context resolving references to this plan's IDs
    pub fn render_context(&self) -> RenderContext {
        let mut ctx = RenderContext::new(
            self.header_rels.clone(),
            self.footer_rels.clone(),
            self.image_rels.clone(),
        );
        for (drawing, id) in &self.drawings {
            ctx.bind_drawing(drawing, id.clone());
        }
        ctx
    }
}

/// `media/<name>`, or `media/<stem><n>.<ext>` when the name is taken
fn free_media_target(drawing: &Drawing, taken: &AHashMap<String, String>) -> String {
    let target = drawing.media_target();
    if !taken.contains_key(&target) {
        return target;
    }
    let (stem, ext) = match drawing.media_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, format!(".{}", ext)),
        _ => (drawing.media_name.as_str(), String::new()),
    };
    (2..)
        .map(|n| format!("media/{}{}{}", stem, n, ext))
        .find(|candidate| !taken.contains_key(candidate))
        .unwrap_or(target)
}

/// DOCX file writer
pub struct DocxWriter;

impl DocxWriter {
    /// Write a document to a file path
    pub fn write_file<P: AsRef<Path>>(document: &Document, path: P) -> DocxResult<()> {
        let file = File::create(path)?;
        Self::write(document, file)
    }

    /// Write a document to a writer
    pub fn write<W: Write + Seek>(document: &Document, writer: W) -> DocxResult<()> {
        let plan = RelationshipPlan::allocate(document)?;
        log::debug!(
            "allocated {} document relationships ({} headers, {} footers, {} images)",
            plan.relationships.len(),
            plan.header_rels.len(),
            plan.footer_rels.len(),
            plan.media.len()
        );

        let mut ctx = plan.render_context();
        let mut package = PackageWriter::new(writer);

        // [Content_Types].xml
        Self::write_content_types(&mut package, document, &plan)?;

        // _rels/.rels
        Self::write_root_rels(&mut package)?;

        // docProps/core.xml and docProps/app.xml
        package.write_xml("docProps/core.xml", &document.properties.to_xml())?;
        package.write_xml("docProps/app.xml", &document.app_properties.to_xml())?;

        // document/document.xml
        package.write_xml(DOCUMENT_PART, &Self::document_xml(document, &mut ctx))?;

        // Auxiliary parts
        package.write_xml("document/styles.xml", &document.styles.to_xml())?;
        package.write_xml("document/numbering.xml", &document.numbering.to_xml())?;
        package.write_xml("document/theme/theme1.xml", &document.theme.to_xml())?;
        package.write_xml("document/settings.xml", &document.settings.to_xml())?;

        // document/_rels/document.xml.rels
        package.write_xml(
            "document/_rels/document.xml.rels",
            &plan.relationships.to_xml(),
        )?;

        // Headers and footers
        for (i, header) in document.headers.iter().enumerate() {
            let name = format!("document/header{}.xml", i + 1);
            package.write_xml(&name, &header.render(&mut ctx))?;
        }
        for (i, footer) in document.footers.iter().enumerate() {
            let name = format!("document/footer{}.xml", i + 1);
            package.write_xml(&name, &footer.render(&mut ctx))?;
        }

        // Media
        for (target, drawing) in &plan.media {
            let data = drawing
                .image_data
                .as_deref()
                .ok_or_else(|| DocxError::MissingImage(drawing.media_name.clone()))?;
            package.write_part(&format!("document/{}", target), data)?;
        }

        package.finish()?;
        Ok(())
    }

    /// Serialize the main document part
    fn document_xml(document: &Document, ctx: &mut RenderContext) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(XML_DECLARATION);
        out.push_str(&format!(
            "<w:document xmlns:w=\"{}\" xmlns:r=\"{}\" xmlns:wp=\"{}\">",
            NS_W, NS_R, NS_WP
        ));
        document.body.write_xml(&mut out, ctx);
        out.push_str("</w:document>");
        out
    }

    fn write_content_types<W: Write + Seek>(
        package: &mut PackageWriter<W>,
        document: &Document,
        plan: &RelationshipPlan<'_>,
    ) -> DocxResult<()> {
        let mut content_types = document.content_types.clone();

        let mut extensions = AHashSet::new();
        for (_, drawing) in &plan.media {
            let ext = drawing.extension();
            if !ext.is_empty() && extensions.insert(ext.clone()) {
                content_types.add_default(&ext, mime::for_image_extension(&ext));
            }
        }

        package.write_xml("[Content_Types].xml", &content_types.to_xml())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(package: &mut PackageWriter<W>) -> DocxResult<()> {
        let mut rels = Relationships::new();
        rels.add(rel_type::OFFICE_DOCUMENT, DOCUMENT_PART);
        rels.add(rel_type::CORE_PROPERTIES, "docProps/core.xml");
        rels.add(rel_type::EXTENDED_PROPERTIES, "docProps/app.xml");
        package.write_xml("_rels/.rels", &rels.to_xml())?;
        Ok(())
    }
}
