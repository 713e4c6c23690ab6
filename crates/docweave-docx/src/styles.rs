//! Style definitions (`styles.xml`)

use docweave_core::xml::{escape, NS_W, XML_DECLARATION};

use crate::paragraph::ParagraphProperties;
use crate::render::RenderContext;
use crate::run::RunProperties;
use crate::table::TableProperties;
use crate::types::StyleType;

/// A named style (`w:style`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub id: String,
    pub style_type: StyleType,
    pub name: String,
    pub based_on: String,
    pub next: String,
    pub link: String,
    /// Default style for its type; also shown in the quick style gallery
    pub default: bool,
    pub custom_style: bool,
    /// Written for paragraph styles only
    pub paragraph_properties: ParagraphProperties,
    pub run_properties: RunProperties,
    /// Written for table styles only
    pub table_properties: Option<TableProperties>,
}

impl Style {
    pub fn new<S: Into<String>>(id: S, name: S, style_type: StyleType) -> Self {
        Self {
            id: id.into(),
            style_type,
            name: name.into(),
            based_on: String::new(),
            next: String::new(),
            link: String::new(),
            default: false,
            custom_style: true,
            paragraph_properties: ParagraphProperties::default(),
            run_properties: RunProperties::default(),
            table_properties: None,
        }
    }

    pub fn set_based_on<S: Into<String>>(&mut self, based_on: S) -> &mut Self {
        self.based_on = based_on.into();
        self
    }

    pub fn set_next<S: Into<String>>(&mut self, next: S) -> &mut Self {
        self.next = next.into();
        self
    }

    pub fn set_link<S: Into<String>>(&mut self, link: S) -> &mut Self {
        self.link = link.into();
        self
    }

    pub fn set_default(&mut self, default: bool) -> &mut Self {
        self.default = default;
        self
    }

    pub fn set_custom_style(&mut self, custom_style: bool) -> &mut Self {
        self.custom_style = custom_style;
        self
    }

    pub fn set_paragraph_properties(&mut self, properties: ParagraphProperties) -> &mut Self {
        self.paragraph_properties = properties;
        self
    }

    pub fn set_run_properties(&mut self, properties: RunProperties) -> &mut Self {
        self.run_properties = properties;
        self
    }

    pub fn set_table_properties(&mut self, properties: TableProperties) -> &mut Self {
        self.table_properties = Some(properties);
        self
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str(&format!("<w:style w:type=\"{}\"", self.style_type.as_str()));
        if self.default {
            out.push_str(" w:default=\"1\"");
        }
        if self.custom_style {
            out.push_str(" w:customStyle=\"1\"");
        }
        out.push_str(&format!(" w:styleId=\"{}\">", escape(&self.id)));

        out.push_str(&format!("<w:name w:val=\"{}\"/>", escape(&self.name)));
        for (tag, value) in [
            ("basedOn", &self.based_on),
            ("next", &self.next),
            ("link", &self.link),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("<w:{} w:val=\"{}\"/>", tag, escape(value)));
            }
        }
        if self.default {
            out.push_str("<w:qFormat/>");
        }

        if self.style_type == StyleType::Paragraph {
            self.paragraph_properties
                .write_xml(out, &mut RenderContext::detached());
        }
        self.run_properties.write_xml(out);
        if self.style_type == StyleType::Table {
            if let Some(table) = &self.table_properties {
                table.write_xml(out);
            }
        }

        out.push_str("</w:style>");
    }
}

/// The styles part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styles {
    pub styles: Vec<Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a style and return it for configuration
    pub fn add_style(&mut self, id: &str, name: &str, style_type: StyleType) -> &mut Style {
        self.styles.push(Style::new(id, name, style_type));
        let last = self.styles.len() - 1;
        &mut self.styles[last]
    }

    pub fn style(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn style_mut(&mut self, id: &str) -> Option<&mut Style> {
        self.styles.iter_mut().find(|s| s.id == id)
    }

    /// Serialize the styles part: document defaults, then every style
    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(XML_DECLARATION);
        out.push_str(&format!("<w:styles xmlns:w=\"{}\">", NS_W));

        out.push_str(concat!(
            "<w:docDefaults>",
            "<w:rPrDefault><w:rPr>",
            r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#,
            r#"<w:sz w:val="22"/><w:szCs w:val="22"/>"#,
            r#"<w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="ar-SA"/>"#,
            "</w:rPr></w:rPrDefault>",
            "<w:pPrDefault><w:pPr>",
            r#"<w:spacing w:after="200" w:line="276" w:lineRule="auto"/>"#,
            "</w:pPr></w:pPrDefault>",
            "</w:docDefaults>"
        ));

        for style in &self.styles {
            style.write_xml(&mut out);
        }

        out.push_str("</w:styles>");
        out
    }
}
