//! The `[Content_Types].xml` manifest

use crate::xml::{escape, NS_CONTENT_TYPES, XML_DECLARATION};

/// MIME types used by the packages docweave writes
pub mod mime {
    pub const XML: &str = "application/xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

    pub const WORD_DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WORD_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const WORD_NUMBERING: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    pub const WORD_SETTINGS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const WORD_HEADER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
    pub const WORD_FOOTER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";

    pub const SHEET_WORKBOOK: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
    pub const SHEET_WORKSHEET: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
    pub const SHEET_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
    pub const SHEET_SHARED_STRINGS: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml";

    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const BMP: &str = "image/bmp";
    pub const TIFF: &str = "image/tiff";
    pub const WMF: &str = "image/x-wmf";
    pub const EMF: &str = "image/x-emf";

    /// MIME type for an image file extension (case-insensitive).
    ///
    /// Unknown extensions fall back to JPEG.
    pub fn for_image_extension(extension: &str) -> &'static str {
        match extension.to_ascii_lowercase().as_str() {
            "png" => PNG,
            "jpg" | "jpeg" => JPEG,
            "gif" => GIF,
            "bmp" => BMP,
            "tif" | "tiff" => TIFF,
            "wmf" => WMF,
            "emf" => EMF,
            _ => JPEG,
        }
    }
}

/// A `<Default>` entry: every part with this extension has this type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultType {
    pub extension: String,
    pub content_type: String,
}

/// An `<Override>` entry for one specific part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideType {
    /// Absolute part name, e.g. `/document/document.xml`
    pub part_name: String,
    pub content_type: String,
}

/// Content-type manifest for a package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTypes {
    defaults: Vec<DefaultType>,
    overrides: Vec<OverrideType>,
}

impl ContentTypes {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the type for an extension. The first declaration for an
    /// extension wins; later ones are ignored.
    pub fn add_default(&mut self, extension: &str, content_type: &str) -> &mut Self {
        if !self.has_default(extension) {
            self.defaults.push(DefaultType {
                extension: extension.to_string(),
                content_type: content_type.to_string(),
            });
        }
        self
    }

    /// Declare the type for one part. A leading `/` is added when missing.
    pub fn add_override(&mut self, part_name: &str, content_type: &str) -> &mut Self {
        let part_name = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{part_name}")
        };
        match self.overrides.iter_mut().find(|o| o.part_name == part_name) {
            Some(existing) => existing.content_type = content_type.to_string(),
            None => self.overrides.push(OverrideType {
                part_name,
                content_type: content_type.to_string(),
            }),
        }
        self
    }

    /// Check whether an extension has a default type (case-insensitive)
    pub fn has_default(&self, extension: &str) -> bool {
        self.defaults
            .iter()
            .any(|d| d.extension.eq_ignore_ascii_case(extension))
    }

    /// Look up the override for a part name
    pub fn override_for(&self, part_name: &str) -> Option<&OverrideType> {
        self.overrides.iter().find(|o| o.part_name == part_name)
    }

    /// Default entries in declaration order
    pub fn defaults(&self) -> &[DefaultType] {
        &self.defaults
    }

    /// Override entries in declaration order
    pub fn overrides(&self) -> &[OverrideType] {
        &self.overrides
    }

    /// Serialize the manifest
    pub fn to_xml(&self) -> String {
        let mut content = format!("{}\n<Types xmlns=\"{}\">", XML_DECLARATION, NS_CONTENT_TYPES);

        for d in &self.defaults {
            content.push_str(&format!(
                "\n    <Default Extension=\"{}\" ContentType=\"{}\"/>",
                escape(&d.extension),
                escape(&d.content_type)
            ));
        }

        for o in &self.overrides {
            content.push_str(&format!(
                "\n    <Override PartName=\"{}\" ContentType=\"{}\"/>",
                escape(&o.part_name),
                escape(&o.content_type)
            ));
        }

        content.push_str("\n</Types>");
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_deduplicated() {
        let mut ct = ContentTypes::new();
        ct.add_default("png", mime::PNG).add_default("PNG", mime::JPEG);
        assert_eq!(ct.defaults().len(), 1);
        assert_eq!(ct.defaults()[0].content_type, mime::PNG);
    }

    #[test]
    fn test_override_normalizes_part_name() {
        let mut ct = ContentTypes::new();
        ct.add_override("document/header1.xml", mime::WORD_HEADER);
        ct.add_override("/document/header1.xml", mime::WORD_HEADER);
        assert_eq!(ct.overrides().len(), 1);
        assert!(ct.override_for("/document/header1.xml").is_some());
    }

    #[test]
    fn test_to_xml_order() {
        let mut ct = ContentTypes::new();
        ct.add_override("/xl/workbook.xml", mime::SHEET_WORKBOOK);
        ct.add_default("xml", mime::XML);
        ct.add_default("rels", mime::RELATIONSHIPS);

        let xml = ct.to_xml();
        let default_pos = xml.find("<Default Extension=\"xml\"").unwrap();
        let rels_pos = xml.find("<Default Extension=\"rels\"").unwrap();
        let override_pos = xml.find("<Override PartName=\"/xl/workbook.xml\"").unwrap();
        assert!(default_pos < rels_pos);
        assert!(rels_pos < override_pos);
        assert!(xml.ends_with("\n</Types>"));
    }

    #[test]
    fn test_image_mime_lookup() {
        assert_eq!(mime::for_image_extension("JPG"), "image/jpeg");
        assert_eq!(mime::for_image_extension("tif"), "image/tiff");
        assert_eq!(mime::for_image_extension("wmf"), "image/x-wmf");
        assert_eq!(mime::for_image_extension("emf"), "image/x-emf");
        assert_eq!(mime::for_image_extension("webp"), "image/jpeg");
    }
}
