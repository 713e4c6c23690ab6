//! Body content as it lands in `document.xml`.

use crate::{assert_well_formed, read_part, text_runs, write_to_vec};
use docweave_docx::{
    BorderPosition, Document, HeightRule, Justification, LineRule, TableWidth, VMerge,
};
use pretty_assertions::assert_eq;

fn document_xml(doc: &Document) -> String {
    read_part(&write_to_vec(doc), "document/document.xml")
}

#[test]
fn test_paragraph_property_order() {
    let mut doc = Document::new();
    doc.add_paragraph()
        .set_style("Heading1")
        .set_keep_next(true)
        .set_numbering(1, 0)
        .set_border(BorderPosition::Bottom, "single", 6, "auto", 1)
        .set_shading("EEEEEE", "auto", "clear")
        .set_spacing_before(240)
        .set_spacing_line(360, LineRule::Auto)
        .set_indent_left(720)
        .set_alignment(Justification::Both)
        .add_text("ordered");
    let xml = document_xml(&doc);

    let tags = [
        "<w:pStyle",
        "<w:keepNext/>",
        "<w:widowControl/>",
        "<w:numPr>",
        "<w:pBdr>",
        "<w:shd",
        "<w:spacing",
        "<w:ind",
        "<w:jc",
    ];
    let positions: Vec<usize> = tags.iter().map(|t| xml.find(t).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
}

#[test]
fn test_page_number_field_runs() {
    let mut doc = Document::new();
    doc.add_page_number_paragraph();
    let xml = document_xml(&doc);

    let begin = xml.find(r#"w:fldCharType="begin""#).unwrap();
    let instr = xml.find("<w:instrText").unwrap();
    let separate = xml.find(r#"w:fldCharType="separate""#).unwrap();
    let end = xml.find(r#"w:fldCharType="end""#).unwrap();
    assert!(begin < instr && instr < separate && separate < end);
    assert!(xml.contains(r#"<w:instrText xml:space="preserve">PAGE</w:instrText>"#));
    assert_eq!(text_runs(&xml), vec!["Page ".to_string(), "1".to_string()]);
}

#[test]
fn test_table_cells_always_end_with_paragraph() {
    let mut doc = Document::new();
    let table = doc.add_table(1, 2);
    table.cell_mut(0, 0).unwrap().add_table(1, 1);
    let xml = document_xml(&doc);
    assert_well_formed(&xml);

    // Both the outer cells and the nested cell close with a paragraph.
    assert_eq!(xml.matches("<w:tc>").count(), 3);
    assert_eq!(xml.matches("<w:p/></w:tc>").count(), 3);
}

#[test]
fn test_table_structure() {
    let mut doc = Document::new();
    let table = doc.add_table(2, 2);
    table
        .set_width(TableWidth::Pct(5000))
        .set_alignment(Justification::Center);
    {
        let cell = table.cell_mut(0, 0).unwrap();
        cell.set_width(TableWidth::Dxa(2400))
            .set_v_merge(VMerge::Restart)
            .add_paragraph()
            .add_text("merged");
    }
    table.cell_mut(1, 0).unwrap().set_v_merge(VMerge::Continue);
    table.add_row().set_height(400, HeightRule::Exact).add_cell();

    let xml = document_xml(&doc);
    assert_well_formed(&xml);
    assert_eq!(xml.matches("<w:tr>").count(), 3);
    assert!(xml.contains(r#"<w:tblW w:w="5000" w:type="pct"/>"#));
    assert!(xml.contains(r#"<w:gridCol w:w="2400"/>"#));
    assert!(xml.contains(r#"<w:vMerge w:val="restart"/>"#));
    assert!(xml.contains(r#"<w:vMerge w:val="continue"/>"#));
    assert!(xml.contains(r#"<w:trHeight w:val="400" w:hRule="exact"/>"#));
}

#[test]
fn test_section_break_then_final_section() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("first");
    doc.add_section_break();
    doc.set_page_size_a4(true);
    doc.add_paragraph().add_text("second");
    let xml = document_xml(&doc);
    assert_well_formed(&xml);

    // One sectPr inside the break paragraph and one closing the body.
    assert_eq!(xml.matches("<w:sectPr>").count(), 2);
    assert!(xml.contains("</w:sectPr></w:pPr></w:p>"));
    assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    assert!(xml.contains(r#"w:orient="landscape""#));
}

#[test]
fn test_font_family_for_text() {
    let mut doc = Document::new();
    doc.add_paragraph()
        .add_text("Use the grep command");
    doc.body.content[0]
        .as_paragraph_mut()
        .unwrap()
        .set_font_family_for_text("Consolas", "grep");
    let xml = document_xml(&doc);
    assert_eq!(
        text_runs(&xml),
        vec!["Use the ".to_string(), "grep".to_string(), " command".to_string()]
    );
    assert_eq!(xml.matches(r#"w:ascii="Consolas""#).count(), 1);
}

#[test]
fn test_numbering_part() {
    let mut doc = Document::new();
    let bullets = doc.numbering.create_bullet_list();
    let numbers = doc.numbering.create_number_list();
    doc.add_paragraph().set_numbering(bullets, 0).add_text("dot");
    doc.add_paragraph().set_numbering(numbers, 1).add_text("two");
    let bytes = write_to_vec(&doc);

    let numbering = read_part(&bytes, "document/numbering.xml");
    assert_well_formed(&numbering);
    assert_eq!(numbering.matches("<w:abstractNum ").count(), 2);
    assert!(numbering.contains(r#"<w:num w:numId="2">"#));
    assert!(numbering.contains(r#"<w:lvlText w:val="%2)"/>"#));

    let document = read_part(&bytes, "document/document.xml");
    assert!(document.contains(r#"<w:ilvl w:val="1"/><w:numId w:val="2"/>"#));
}
