//! Cross-part references: every `r:id`/`r:embed` resolves to exactly one
//! relationship and every relationship target exists in the package.

use std::io::Cursor;

use crate::{attribute_values, part_names, read_bytes, read_part, write_to_vec};
use docweave_docx::{Document, DocxError, Drawing, HeaderFooterType};
use pretty_assertions::assert_eq;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn document_with_everything() -> Document {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("intro");
    doc.add_image_bytes(PNG.to_vec(), "png", "logo", 914_400, 914_400);
    doc.add_header_with_reference(HeaderFooterType::Default)
        .add_paragraph()
        .add_drawing(Drawing::from_bytes(PNG.to_vec(), "png", "logo"));
    doc.add_header_with_reference(HeaderFooterType::First)
        .add_paragraph()
        .add_text("cover");
    doc.add_footer_with_reference(HeaderFooterType::Default)
        .add_page_number();
    doc
}

#[test]
fn test_relationship_ids_resolve() {
    let bytes = write_to_vec(&document_with_everything());
    let rels = read_part(&bytes, "document/_rels/document.xml.rels");
    let ids = attribute_values(&rels, "Relationship", "Id");
    let targets = attribute_values(&rels, "Relationship", "Target");

    // IDs are unique and dense.
    let expected: Vec<String> = (1..=ids.len()).map(|n| format!("rId{}", n)).collect();
    assert_eq!(ids, expected);

    // Every internal target is a part of the package.
    let names = part_names(&bytes);
    for target in &targets {
        let part = format!("document/{}", target);
        assert!(names.contains(&part), "dangling target {}", target);
    }

    // Every reference in document.xml and the header/footer parts resolves.
    let mut referenced = Vec::new();
    for part in [
        "document/document.xml",
        "document/header1.xml",
        "document/header2.xml",
        "document/footer1.xml",
    ] {
        let xml = read_part(&bytes, part);
        referenced.extend(attribute_values(&xml, "w:headerReference", "r:id"));
        referenced.extend(attribute_values(&xml, "w:footerReference", "r:id"));
        referenced.extend(attribute_values(&xml, "a:blip", "r:embed"));
    }
    for id in &referenced {
        assert!(ids.contains(id), "unresolved reference {}", id);
    }
}

#[test]
fn test_header_and_footer_bindings() {
    let bytes = write_to_vec(&document_with_everything());
    let document = read_part(&bytes, "document/document.xml");
    let rels = read_part(&bytes, "document/_rels/document.xml.rels");

    let ids = attribute_values(&rels, "Relationship", "Id");
    let targets = attribute_values(&rels, "Relationship", "Target");
    let target_of = |id: &str| {
        ids.iter()
            .position(|i| i == id)
            .map(|i| targets[i].clone())
            .unwrap()
    };

    let headers = attribute_values(&document, "w:headerReference", "r:id");
    let kinds = attribute_values(&document, "w:headerReference", "w:type");
    assert_eq!(kinds, vec!["default", "first"]);
    assert_eq!(target_of(&headers[0]), "header1.xml");
    assert_eq!(target_of(&headers[1]), "header2.xml");

    let footers = attribute_values(&document, "w:footerReference", "r:id");
    assert_eq!(target_of(&footers[0]), "footer1.xml");

    // A first-page header turns on the distinct title page.
    assert!(document.contains("<w:titlePg/>"));
}

#[test]
fn test_shared_image_written_once() {
    let bytes = write_to_vec(&document_with_everything());
    let names = part_names(&bytes);
    let media: Vec<&String> = names.iter().filter(|n| n.contains("/media/")).collect();
    assert_eq!(media, vec!["document/media/logo.png"]);
    assert_eq!(read_bytes(&bytes, "document/media/logo.png"), PNG);

    let body = read_part(&bytes, "document/document.xml");
    let header = read_part(&bytes, "document/header1.xml");
    assert_eq!(
        attribute_values(&body, "a:blip", "r:embed"),
        attribute_values(&header, "a:blip", "r:embed")
    );

    let manifest = read_part(&bytes, "[Content_Types].xml");
    assert_eq!(manifest.matches(r#"Extension="png""#).count(), 1);
}

#[test]
fn test_shape_ids_unique_across_parts() {
    let bytes = write_to_vec(&document_with_everything());
    let mut ids = attribute_values(&read_part(&bytes, "document/document.xml"), "wp:docPr", "id");
    ids.extend(attribute_values(
        &read_part(&bytes, "document/header1.xml"),
        "wp:docPr",
        "id",
    ));
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_image_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");
    std::fs::write(&path, PNG).unwrap();

    let mut doc = Document::new();
    doc.add_image(&path, 1_828_800, 914_400)
        .unwrap()
        .set_bold(false);
    let bytes = write_to_vec(&doc);

    assert_eq!(read_bytes(&bytes, "document/media/chart.png"), PNG);
    let body = read_part(&bytes, "document/document.xml");
    assert_eq!(attribute_values(&body, "wp:extent", "cx"), vec!["1828800"]);
}

#[test]
fn test_missing_image_aborts_save() {
    let mut doc = Document::new();
    let mut drawing = Drawing::new();
    drawing.set_media_name("lost.png");
    doc.add_paragraph().add_drawing(drawing);

    let mut buf = Vec::new();
    let err = doc.write(Cursor::new(&mut buf)).unwrap_err();
    assert!(matches!(err, DocxError::MissingImage(ref name) if name == "lost.png"));
    assert!(err.to_string().contains("lost.png"));
}

#[test]
fn test_unbound_reference_renders_empty_id() {
    let mut doc = Document::new();
    doc.add_footer_reference(HeaderFooterType::Even, 3);
    let bytes = write_to_vec(&doc);
    let document = read_part(&bytes, "document/document.xml");
    assert_eq!(
        attribute_values(&document, "w:footerReference", "r:id"),
        vec![String::new()]
    );
}

#[test]
fn test_same_file_name_from_two_folders() {
    let dir = tempfile::tempdir().unwrap();
    for (folder, byte) in [("a", 1u8), ("b", 2u8)] {
        std::fs::create_dir(dir.path().join(folder)).unwrap();
        std::fs::write(dir.path().join(folder).join("logo.png"), [byte; 3]).unwrap();
    }

    let mut doc = Document::new();
    doc.add_image(dir.path().join("a/logo.png"), 10, 10).unwrap();
    doc.add_image(dir.path().join("b/logo.png"), 10, 10).unwrap();
    doc.add_image(dir.path().join("a/logo.png"), 20, 20).unwrap();
    let bytes = write_to_vec(&doc);

    let mut media: Vec<String> = part_names(&bytes)
        .into_iter()
        .filter(|name| name.starts_with("document/media/"))
        .collect();
    media.sort();
    assert_eq!(
        media,
        vec!["document/media/logo.png", "document/media/logo2.png"]
    );
    assert_eq!(read_bytes(&bytes, "document/media/logo.png"), vec![1, 1, 1]);
    assert_eq!(read_bytes(&bytes, "document/media/logo2.png"), vec![2, 2, 2]);

    let rels = read_part(&bytes, "document/_rels/document.xml.rels");
    let ids = attribute_values(&rels, "Relationship", "Id");
    let targets = attribute_values(&rels, "Relationship", "Target");
    let target_of = |id: &str| {
        ids.iter()
            .position(|i| i == id)
            .map(|i| targets[i].clone())
            .unwrap()
    };

    let body = read_part(&bytes, "document/document.xml");
    let embedded: Vec<String> = attribute_values(&body, "a:blip", "r:embed")
        .iter()
        .map(|id| target_of(id.as_str()))
        .collect();
    assert_eq!(
        embedded,
        vec!["media/logo.png", "media/logo2.png", "media/logo.png"]
    );
}
