//! Embedded pictures (`w:drawing`)

use std::path::Path;

use docweave_core::mime;
use docweave_core::xml::{escape, NS_A, NS_PIC};

use crate::error::DocxResult;
use crate::render::RenderContext;

/// Text wrapping around a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapType {
    /// Sits in the line like a character
    #[default]
    Inline,
    Square,
    Tight,
    Through,
    TopAndBottom,
    /// Floats behind the text
    Behind,
    /// Floats in front of the text
    InFront,
}

/// Anchor position along one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingPosition {
    /// `page`, `margin`, `column`, `paragraph`, `line`, `character`
    pub relative_from: String,
    /// `left`, `center`, `right`, `top`, `bottom`, ...; wins over `offset` when set
    pub align: String,
    /// Offset in EMU
    pub offset: i64,
}

impl DrawingPosition {
    pub fn aligned<S: Into<String>>(relative_from: S, align: S) -> Self {
        Self {
            relative_from: relative_from.into(),
            align: align.into(),
            offset: 0,
        }
    }

    pub fn offset<S: Into<String>>(relative_from: S, offset: i64) -> Self {
        Self {
            relative_from: relative_from.into(),
            align: String::new(),
            offset,
        }
    }

    fn write_xml(&self, out: &mut String, tag: &str) {
        out.push_str(&format!(
            "<wp:{} relativeFrom=\"{}\">",
            tag,
            escape(&self.relative_from)
        ));
        if self.align.is_empty() {
            out.push_str(&format!("<wp:posOffset>{}</wp:posOffset>", self.offset));
        } else {
            out.push_str(&format!("<wp:align>{}</wp:align>", escape(&self.align)));
        }
        out.push_str(&format!("</wp:{}>", tag));
    }
}

/// A picture placed in a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Drawing {
    /// Display name (`docPr name`)
    pub name: String,
    /// Alternative text
    pub description: String,
    /// File name inside `document/media/`
    pub media_name: String,
    /// Raw image bytes
    pub image_data: Option<Vec<u8>>,
    /// Width in EMU
    pub width: i64,
    /// Height in EMU
    pub height: i64,
    pub wrap: WrapType,
    pub position_h: Option<DrawingPosition>,
    pub position_v: Option<DrawingPosition>,
}

impl Drawing {
    /// An empty inline drawing with no image data
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a picture from disk. The media name is the file's base name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> DocxResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name: file_name.clone(),
            media_name: file_name,
            image_data: Some(data),
            ..Self::default()
        })
    }

    /// Wrap raw bytes. The media name is `<name>.<format>`.
    pub fn from_bytes(data: Vec<u8>, format: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            media_name: format!("{}.{}", name, format),
            image_data: Some(data),
            ..Self::default()
        }
    }

    /// Part target relative to the document part, e.g. `media/logo.png`
    pub fn media_target(&self) -> String {
        format!("media/{}", self.media_name)
    }

    /// Lower-case extension of the media file
    pub fn extension(&self) -> String {
        Path::new(&self.media_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default()
    }

    /// MIME type inferred from the media file extension
    pub fn content_type(&self) -> &'static str {
        mime::for_image_extension(&self.extension())
    }

    pub fn set_image_data(&mut self, data: Vec<u8>) -> &mut Self {
        self.image_data = Some(data);
        self
    }

    /// Size in EMU
    pub fn set_size(&mut self, width: i64, height: i64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_media_name<S: Into<String>>(&mut self, media_name: S) -> &mut Self {
        self.media_name = media_name.into();
        self
    }

    pub fn set_wrap(&mut self, wrap: WrapType) -> &mut Self {
        self.wrap = wrap;
        self
    }

    pub fn set_position_h<S: Into<String>>(
        &mut self,
        relative_from: S,
        align: S,
        offset: i64,
    ) -> &mut Self {
        self.position_h = Some(DrawingPosition {
            relative_from: relative_from.into(),
            align: align.into(),
            offset,
        });
        self
    }

    pub fn set_position_v<S: Into<String>>(
        &mut self,
        relative_from: S,
        align: S,
        offset: i64,
    ) -> &mut Self {
        self.position_v = Some(DrawingPosition {
            relative_from: relative_from.into(),
            align: align.into(),
            offset,
        });
        self
    }

    /// Serialize with placeholder relationship IDs
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out, &mut RenderContext::detached());
        out
    }

    pub(crate) fn write_xml(&self, out: &mut String, ctx: &mut RenderContext) {
        let shape_id = ctx.next_shape_id();
        let rel_id = ctx.drawing_rel(self);

        out.push_str("<w:drawing>");
        if self.wrap == WrapType::Inline {
            out.push_str(r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#);
            self.write_extent(out);
            self.write_doc_pr(out, shape_id);
            self.write_graphic(out, &rel_id);
            out.push_str("</wp:inline>");
        } else {
            out.push_str(&format!(
                r#"<wp:anchor distT="0" distB="0" distL="0" distR="0" simplePos="0" relativeHeight="{}" behindDoc="{}" locked="0" layoutInCell="1" allowOverlap="1">"#,
                shape_id,
                if self.wrap == WrapType::Behind { "1" } else { "0" }
            ));
            out.push_str(r#"<wp:simplePos x="0" y="0"/>"#);
            match &self.position_h {
                Some(pos) => pos.write_xml(out, "positionH"),
                None => DrawingPosition::aligned("column", "left").write_xml(out, "positionH"),
            }
            match &self.position_v {
                Some(pos) => pos.write_xml(out, "positionV"),
                None => DrawingPosition::aligned("paragraph", "top").write_xml(out, "positionV"),
            }
            self.write_extent(out);
            self.write_wrap(out);
            self.write_doc_pr(out, shape_id);
            self.write_graphic(out, &rel_id);
            out.push_str("</wp:anchor>");
        }
        out.push_str("</w:drawing>");
    }

    fn write_extent(&self, out: &mut String) {
        out.push_str(&format!(
            r#"<wp:extent cx="{}" cy="{}"/><wp:effectExtent l="0" t="0" r="0" b="0"/>"#,
            self.width, self.height
        ));
    }

    fn write_wrap(&self, out: &mut String) {
        const POLYGON: &str = r#"<wp:wrapPolygon edited="0"><wp:start x="0" y="0"/><wp:lineTo x="0" y="21600"/><wp:lineTo x="21600" y="21600"/><wp:lineTo x="21600" y="0"/><wp:lineTo x="0" y="0"/></wp:wrapPolygon>"#;
        match self.wrap {
            WrapType::Inline | WrapType::Square => {
                out.push_str(r#"<wp:wrapSquare wrapText="bothSides"/>"#)
            }
            WrapType::Tight => out.push_str(&format!(
                r#"<wp:wrapTight wrapText="bothSides">{}</wp:wrapTight>"#,
                POLYGON
            )),
            WrapType::Through => out.push_str(&format!(
                r#"<wp:wrapThrough wrapText="bothSides">{}</wp:wrapThrough>"#,
                POLYGON
            )),
            WrapType::TopAndBottom => out.push_str("<wp:wrapTopAndBottom/>"),
            WrapType::Behind | WrapType::InFront => out.push_str("<wp:wrapNone/>"),
        }
    }

    fn display_name(&self, shape_id: u32) -> String {
        if self.name.is_empty() {
            format!("Picture {}", shape_id)
        } else {
            self.name.clone()
        }
    }

    fn write_doc_pr(&self, out: &mut String, shape_id: u32) {
        out.push_str(&format!(
            r#"<wp:docPr id="{}" name="{}" descr="{}"/>"#,
            shape_id,
            escape(&self.display_name(shape_id)),
            escape(&self.description)
        ));
        out.push_str(&format!(
            r#"<wp:cNvGraphicFramePr><a:graphicFrameLocks xmlns:a="{}" noChangeAspect="1"/></wp:cNvGraphicFramePr>"#,
            NS_A
        ));
    }

    fn write_graphic(&self, out: &mut String, rel_id: &str) {
        out.push_str(&format!(
            r#"<a:graphic xmlns:a="{}"><a:graphicData uri="{}"><pic:pic xmlns:pic="{}">"#,
            NS_A, NS_PIC, NS_PIC
        ));
        out.push_str(&format!(
            r#"<pic:nvPicPr><pic:cNvPr id="0" name="{}" descr="{}"/><pic:cNvPicPr><a:picLocks noChangeAspect="1" noChangeArrowheads="1"/></pic:cNvPicPr></pic:nvPicPr>"#,
            escape(&self.media_name),
            escape(&self.description)
        ));
        out.push_str(&format!(
            r#"<pic:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            escape(rel_id)
        ));
        out.push_str(&format!(
            r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr>"#,
            self.width, self.height
        ));
        out.push_str("</pic:pic></a:graphicData></a:graphic>");
    }
}
