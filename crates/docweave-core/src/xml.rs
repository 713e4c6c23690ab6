//! XML helpers shared by every part serializer

use std::borrow::Cow;

/// Declaration written at the top of every XML part
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// WordprocessingML main namespace
pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office document relationships namespace (`r:` prefix)
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// WordprocessingML drawing namespace (`wp:` prefix)
pub const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
/// DrawingML main namespace (`a:` prefix)
pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// DrawingML picture namespace (`pic:` prefix)
pub const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
/// SpreadsheetML main namespace
pub const NS_SPREADSHEET: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
/// Package relationships namespace
pub const NS_PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
/// Content types namespace
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Escape text or attribute content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity references. Borrowed input
/// is returned unchanged when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// OOXML boolean attribute value
pub fn bool_attr(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
