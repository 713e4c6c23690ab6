//! Package layout: parts, manifest and root relationships.

use crate::{assert_well_formed, attribute_values, part_names, read_part, text_runs, write_to_vec};
use docweave_docx::{Document, DocxWriter, HeaderFooterType};
use pretty_assertions::assert_eq;

#[test]
fn test_minimal_document_parts() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("Hello & <World>");
    let bytes = write_to_vec(&doc);

    let names = part_names(&bytes);
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "document/document.xml",
        "document/styles.xml",
        "document/numbering.xml",
        "document/theme/theme1.xml",
        "document/settings.xml",
        "document/_rels/document.xml.rels",
    ] {
        assert!(names.iter().any(|n| n == part), "missing {}", part);
    }
    assert_eq!(names[0], "[Content_Types].xml");

    let document = read_part(&bytes, "document/document.xml");
    assert!(document.contains("Hello &amp; &lt;World&gt;"));
    assert_eq!(text_runs(&document), vec!["Hello & <World>".to_string()]);
}

#[test]
fn test_every_xml_part_is_well_formed() {
    let mut doc = Document::new();
    doc.set_title("A \"quoted\" <title>").set_creator("O'Brien & Sons");
    doc.add_paragraph().add_text("body");
    doc.add_header_with_reference(HeaderFooterType::Default)
        .add_paragraph()
        .add_text("head");
    doc.add_footer_with_reference(HeaderFooterType::Default)
        .add_page_number();
    doc.add_table(2, 2);
    let bytes = write_to_vec(&doc);

    for name in part_names(&bytes) {
        if name.ends_with(".xml") || name.ends_with(".rels") {
            assert_well_formed(&read_part(&bytes, &name));
        }
    }
}

#[test]
fn test_manifest_overrides() {
    let mut doc = Document::new();
    doc.add_header();
    doc.add_footer();
    let bytes = write_to_vec(&doc);
    let manifest = read_part(&bytes, "[Content_Types].xml");

    let parts = attribute_values(&manifest, "Override", "PartName");
    assert_eq!(
        parts,
        vec![
            "/document/document.xml",
            "/document/styles.xml",
            "/document/numbering.xml",
            "/document/settings.xml",
            "/document/theme/theme1.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
            "/document/header1.xml",
            "/document/footer1.xml",
        ]
    );
    assert!(manifest.contains(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"
    ));
}

#[test]
fn test_root_relationships() {
    let bytes = write_to_vec(&Document::new());
    let rels = read_part(&bytes, "_rels/.rels");
    assert_eq!(
        attribute_values(&rels, "Relationship", "Target"),
        vec!["document/document.xml", "docProps/core.xml", "docProps/app.xml"]
    );
    assert_eq!(
        attribute_values(&rels, "Relationship", "Id"),
        vec!["rId1", "rId2", "rId3"]
    );
}

#[test]
fn test_core_properties_are_escaped() {
    let mut doc = Document::new();
    doc.set_title("R&D <draft>").set_creator("Ana");
    let bytes = write_to_vec(&doc);
    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("R&amp;D &lt;draft&gt;"));
    assert!(core.contains("<cp:lastModifiedBy>Ana</cp:lastModifiedBy>"));
}

#[test]
fn test_output_is_deterministic() {
    let build = || {
        let mut doc = Document::new();
        let created = chrono::DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        doc.set_created(created).set_modified(created);
        doc.add_paragraph().add_text("same");
        doc.add_image_bytes(vec![0x89, b'P', b'N', b'G'], "png", "pic", 100, 100);
        doc.add_header_with_reference(HeaderFooterType::Default);
        doc
    };
    let first = build();
    let second = build();
    for part in [
        "[Content_Types].xml",
        "document/document.xml",
        "document/_rels/document.xml.rels",
        "docProps/core.xml",
    ] {
        assert_eq!(
            read_part(&write_to_vec(&first), part),
            read_part(&write_to_vec(&second), part)
        );
    }
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.docx");

    let mut doc = Document::new();
    doc.add_paragraph().add_text("on disk");
    doc.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(read_part(&bytes, "document/document.xml").contains("on disk"));

    // The writer entry point produces the same document part.
    let other = dir.path().join("other.docx");
    DocxWriter::write_file(&doc, &other).unwrap();
    let again = std::fs::read(&other).unwrap();
    assert_eq!(
        read_part(&bytes, "document/document.xml"),
        read_part(&again, "document/document.xml")
    );
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.docx");
    let err = Document::new().save(&path).unwrap_err();
    assert!(matches!(err, docweave_docx::DocxError::Io(_)));
}
