//! Package metadata parts (`docProps/core.xml` and `docProps/app.xml`)

use chrono::{DateTime, Utc};

use crate::xml::{escape, XML_DECLARATION};

/// W3CDTF timestamp format used by `dcterms:created` / `dcterms:modified`
const W3CDTF: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Core properties (title, author, timestamps)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: String,
    pub subject: String,
    pub creator: String,
    pub keywords: String,
    pub description: String,
    pub last_modified_by: String,
    /// Written only when greater than zero
    pub revision: u32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for CoreProperties {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: String::new(),
            subject: String::new(),
            creator: String::new(),
            keywords: String::new(),
            description: String::new(),
            last_modified_by: String::new(),
            revision: 1,
            created: now,
            modified: now,
        }
    }
}

impl CoreProperties {
    /// Create properties stamped with the current time
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize as `docProps/core.xml`
    pub fn to_xml(&self) -> String {
        let mut xml = format!(
            "{}\n<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
xmlns:dcterms=\"http://purl.org/dc/terms/\" \
xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
            XML_DECLARATION
        );

        let fields = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
            ("dc:description", &self.description),
            ("cp:lastModifiedBy", &self.last_modified_by),
        ];
        for (tag, value) in fields {
            if !value.is_empty() {
                xml.push_str(&format!("\n    <{tag}>{}</{tag}>", escape(value)));
            }
        }

        if self.revision > 0 {
            xml.push_str(&format!("\n    <cp:revision>{}</cp:revision>", self.revision));
        }

        xml.push_str(&format!(
            "\n    <dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
            self.created.format(W3CDTF)
        ));
        xml.push_str(&format!(
            "\n    <dcterms:modified xsi:type=\"dcterms:W3CDTF\">{}</dcterms:modified>",
            self.modified.format(W3CDTF)
        ));

        xml.push_str("\n</cp:coreProperties>");
        xml
    }
}

/// Extended (application) properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProperties {
    pub application: String,
    pub app_version: String,
}

impl Default for AppProperties {
    fn default() -> Self {
        Self {
            application: "docweave".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppProperties {
    /// Serialize as `docProps/app.xml`
    pub fn to_xml(&self) -> String {
        format!(
            r#"{}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>{}</Application>
    <AppVersion>{}</AppVersion>
</Properties>"#,
            XML_DECLARATION,
            escape(&self.application),
            escape(&self.app_version)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_props() -> CoreProperties {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        CoreProperties {
            created: at,
            modified: at,
            ..CoreProperties::default()
        }
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let xml = fixed_props().to_xml();
        assert!(!xml.contains("<dc:title>"));
        assert!(!xml.contains("<dc:creator>"));
        assert!(xml.contains("<cp:revision>1</cp:revision>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-05-17T08:30:00Z</dcterms:created>"#
        ));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut props = fixed_props();
        props.title = "Q&A <draft>".into();
        props.creator = "O'Neil".into();
        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Q&amp;A &lt;draft&gt;</dc:title>"));
        assert!(xml.contains("<dc:creator>O&apos;Neil</dc:creator>"));
    }

    #[test]
    fn test_zero_revision_is_omitted() {
        let mut props = fixed_props();
        props.revision = 0;
        assert!(!props.to_xml().contains("cp:revision"));
    }

    #[test]
    fn test_app_properties() {
        let xml = AppProperties::default().to_xml();
        assert!(xml.contains("<Application>docweave</Application>"));
    }
}
