//! Package layout: parts, manifest and relationships.

use crate::{assert_well_formed, attribute_values, part_names, read_part, write_to_vec};
use chrono::{TimeZone, Utc};
use docweave_xlsx::{Workbook, XlsxError, XlsxWriter};
use pretty_assertions::assert_eq;

fn two_sheet_workbook() -> Workbook {
    let mut wb = Workbook::new();
    wb.set_title("Ledger").set_creator("Accounts & Co");
    wb.add_worksheet("Income")
        .unwrap()
        .add_cell("A1", "Revenue")
        .unwrap();
    wb.add_worksheet("Costs").unwrap().add_cell("B2", 12.5).unwrap();
    wb
}

#[test]
fn test_workbook_parts() {
    let bytes = write_to_vec(&two_sheet_workbook());
    let names = part_names(&bytes);
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/worksheets/sheet1.xml",
            "xl/worksheets/sheet2.xml",
            "xl/styles.xml",
            "xl/theme/theme1.xml",
            "xl/sharedStrings.xml",
        ]
    );
    for name in &names {
        assert_well_formed(&read_part(&bytes, name));
    }
}

#[test]
fn test_manifest() {
    let bytes = write_to_vec(&two_sheet_workbook());
    let manifest = read_part(&bytes, "[Content_Types].xml");
    assert_eq!(
        attribute_values(&manifest, "Override", "PartName"),
        vec![
            "/xl/workbook.xml",
            "/xl/styles.xml",
            "/xl/theme/theme1.xml",
            "/xl/sharedStrings.xml",
            "/xl/worksheets/sheet1.xml",
            "/xl/worksheets/sheet2.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ]
    );
    assert_eq!(
        attribute_values(&manifest, "Default", "Extension"),
        vec!["xml", "rels", "png", "jpeg", "jpg"]
    );
}

#[test]
fn test_relationship_graph() {
    let bytes = write_to_vec(&two_sheet_workbook());

    let root = read_part(&bytes, "_rels/.rels");
    assert_eq!(
        attribute_values(&root, "Relationship", "Target"),
        vec!["xl/workbook.xml", "docProps/core.xml", "docProps/app.xml"]
    );

    let rels = read_part(&bytes, "xl/_rels/workbook.xml.rels");
    let ids = attribute_values(&rels, "Relationship", "Id");
    let targets = attribute_values(&rels, "Relationship", "Target");
    assert_eq!(ids, vec!["rId1", "rId2", "rId3", "rId4", "rId5"]);
    for target in &targets {
        read_part(&bytes, &format!("xl/{}", target));
    }

    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"<workbookPr defaultThemeVersion="124226"/>"#));
    assert_eq!(attribute_values(&workbook, "sheet", "name"), vec!["Income", "Costs"]);
    let sheet_rels = attribute_values(&workbook, "sheet", "r:id");
    assert_eq!(sheet_rels, vec!["rId4", "rId5"]);
    for id in sheet_rels {
        let pos = ids.iter().position(|i| *i == id).unwrap();
        assert!(targets[pos].starts_with("worksheets/sheet"));
    }
}

#[test]
fn test_core_properties() {
    let bytes = write_to_vec(&two_sheet_workbook());
    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("<dc:title>Ledger</dc:title>"));
    assert!(core.contains("Accounts &amp; Co"));
}

#[test]
fn test_output_is_deterministic() {
    let build = || {
        let mut wb = two_sheet_workbook();
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        wb.set_created(stamp).set_modified(stamp);
        write_to_vec(&wb)
    };
    let first = build();
    let second = build();
    for name in part_names(&first) {
        assert_eq!(read_part(&first, &name), read_part(&second, &name), "{}", name);
    }
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.xlsx");
    two_sheet_workbook().save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let other = dir.path().join("writer.xlsx");
    XlsxWriter::write_file(&two_sheet_workbook(), &other).unwrap();
    assert!(other.exists());
}

#[test]
fn test_save_errors() {
    let dir = tempfile::tempdir().unwrap();
    match Workbook::new().save(dir.path().join("empty.xlsx")) {
        Err(XlsxError::EmptyWorkbook) => {}
        other => panic!("expected EmptyWorkbook, got {:?}", other),
    }
    match two_sheet_workbook().save(dir.path().join("missing").join("book.xlsx")) {
        Err(XlsxError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other),
    }
}
