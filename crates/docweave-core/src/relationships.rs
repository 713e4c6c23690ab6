//! OPC relationship parts (`.rels`)

use crate::xml::{escape, NS_PACKAGE_RELS, XML_DECLARATION};

/// Relationship type URIs
pub mod rel_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const HEADER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    pub const FOOTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const HYPERLINK: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
    pub const SHARED_STRINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";
}

/// Whether a relationship target lives inside the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

/// A single relationship entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID, e.g. `rId7`
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target part (relative to the source part) or external URI
    pub target: String,
    /// Internal or external target
    pub target_mode: TargetMode,
}

/// An ordered relationship set, serialized as one `.rels` part
///
/// IDs are minted by counting the entries already present, so every
/// allocation must happen after the previous ones for the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    items: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationship set
    pub fn new() -> Self {
        Self::default()
    }

    /// The ID the next [`add`](Self::add) call will mint
    pub fn next_id(&self) -> String {
        format!("rId{}", self.items.len() + 1)
    }

    /// Add an internal relationship, returning the minted ID
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = self.next_id();
        self.add_with_id(&id, rel_type, target);
        id
    }

    /// Add an internal relationship with a caller-chosen ID
    pub fn add_with_id(&mut self, id: &str, rel_type: &str, target: &str) -> &Relationship {
        self.push(id, rel_type, target, TargetMode::Internal)
    }

    /// Add an external relationship (e.g. a hyperlink), returning the minted ID
    pub fn add_external(&mut self, rel_type: &str, target: &str) -> String {
        let id = self.next_id();
        self.push(&id, rel_type, target, TargetMode::External);
        id
    }

    fn push(
        &mut self,
        id: &str,
        rel_type: &str,
        target: &str,
        target_mode: TargetMode,
    ) -> &Relationship {
        self.items.push(Relationship {
            id: id.to_string(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
            target_mode,
        });
        &self.items[self.items.len() - 1]
    }

    /// Look up a relationship by ID
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.items.iter().find(|r| r.id == id)
    }

    /// All relationships of one type, in insertion order
    pub fn by_type<'a>(&'a self, rel_type: &'a str) -> impl Iterator<Item = &'a Relationship> {
        self.items.iter().filter(move |r| r.rel_type == rel_type)
    }

    /// Iterate over all relationships
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.items.iter()
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize as a complete `.rels` part
    pub fn to_xml(&self) -> String {
        let mut content = format!(
            "{}\n<Relationships xmlns=\"{}\">",
            XML_DECLARATION, NS_PACKAGE_RELS
        );

        for rel in &self.items {
            content.push_str(&format!(
                "\n    <Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"",
                escape(&rel.id),
                escape(&rel.rel_type),
                escape(&rel.target)
            ));
            if rel.target_mode == TargetMode::External {
                content.push_str(" TargetMode=\"External\"");
            }
            content.push_str("/>");
        }

        content.push_str("\n</Relationships>");
        content
    }
}
